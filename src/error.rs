use thiserror::Error;

/// Failures at the JSON widget boundary. The layout and hover core never fail.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid widget JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported widget type {0:?} (expected \"timeline\" or \"chart\")")]
    UnsupportedType(String),

    #[error("invalid {widget} data: {source}")]
    InvalidData {
        widget: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, WidgetError>;
