//! SharpRender Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod projector;
pub mod url_utils;
pub mod error;

pub use types::{
    Aggregations, AiRecommendation, ImageScanResult, NetworkInfo, Scan, ScanCreated,
    ScanHistoryResponse, SubmitScanRequest, TimingInfo, WebsiteMetadata,
};
pub use projector::{
    cache_status, classify_load_time, classify_load_time_secs, compute_aggregations,
    content_length_kb, derive_format_distribution, derive_history_status, derive_scatter_series,
    derive_summary, dimensions_label, effective_aggregations, file_name_from_src, file_size_label,
    filter_displayable, format_label, load_time_label, FormatShare, HistoryStatus, LoadTimeStatus,
    ScanSummary, ScatterPoint,
};
pub use url_utils::{format_url, is_valid_url, normalize_url};
pub use error::{Error, Result};
