use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevMatchError {
    #[error("account file not found: {0}")]
    AccountNotFound(String),

    #[error("account parse error: {0}")]
    AccountParse(String),

    #[error("both inputs describe the same account: {0}")]
    SameAccount(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DevMatchError>;
