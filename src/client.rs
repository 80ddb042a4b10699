//! スキャンAPIクライアント
//!
//! - POST /scan           スキャン開始
//! - GET  /scan/{id}      スキャン取得
//! - GET  /scan/history   履歴取得（user_id指定）

use crate::error::{Result, SharpRenderError};
use sharprender_common::{Scan, ScanCreated, ScanHistoryResponse, SubmitScanRequest};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn submit_scan(&self, url: &str, user_id: &str) -> Result<ScanCreated> {
        let request = SubmitScanRequest {
            url: url.to_string(),
            user_id: user_id.to_string(),
        };
        let resp = self
            .http
            .post(format!("{}/scan", self.base_url))
            .json(&request)
            .send()
            .await?;

        Self::check_status(&resp)?;
        Ok(resp.json().await?)
    }

    pub async fn fetch_scan(&self, scan_id: &str) -> Result<Scan> {
        let resp = self
            .http
            .get(format!("{}/scan/{}", self.base_url, scan_id))
            .send()
            .await?;

        Self::check_status(&resp)?;
        Ok(resp.json().await?)
    }

    pub async fn fetch_history(&self, user_id: &str) -> Result<Vec<Scan>> {
        let resp = self
            .http
            .get(format!("{}/scan/history", self.base_url))
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        Self::check_status(&resp)?;
        let history: ScanHistoryResponse = resp.json().await?;
        Ok(history.scans)
    }

    fn check_status(resp: &reqwest::Response) -> Result<()> {
        let status = resp.status();
        if !status.is_success() {
            return Err(SharpRenderError::Api {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
