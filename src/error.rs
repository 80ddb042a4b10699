use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharpRenderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ユーザーIDが設定されていません。`sharprender config --set-user-id YOUR_ID` で設定してください")]
    MissingUserId,

    #[error("不正なURL: {0}")]
    InvalidUrl(String),

    #[error("APIエラー: ステータス {status}")]
    Api { status: u16 },

    #[error("スキャンがタイムアウトしました: {0}")]
    ScanTimeout(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sharprender_common::Error> for SharpRenderError {
    fn from(err: sharprender_common::Error) -> Self {
        match err {
            sharprender_common::Error::InvalidUrl(url) => SharpRenderError::InvalidUrl(url),
            sharprender_common::Error::Json(e) => SharpRenderError::JsonParse(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SharpRenderError>;
