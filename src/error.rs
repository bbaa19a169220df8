use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolSetError {
    /// The host reported a tool material this crate has no rank for.
    #[error("unknown tool material: {0}")]
    UnknownToolMaterial(String),

    #[error("hotbar holds {got} items, at most {max} fit")]
    HotbarOverflow { got: usize, max: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ToolSetError>;
