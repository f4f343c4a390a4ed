use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteProgressError {
    #[error("ホームディレクトリが見つかりません。`--config` で設定ファイルを指定してください")]
    HomeDirNotFound,

    #[error("設定ファイルが見つかりません: {0}")]
    ConfigNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ログ初期化エラー: {0}")]
    Logging(String),

    #[error(transparent)]
    Common(#[from] route_progress_common::Error),
}

pub type Result<T> = std::result::Result<T, RouteProgressError>;
