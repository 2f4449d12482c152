use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to read template {}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template {} is not valid JSON", .path.display())]
    TemplateMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Template has unexpected shape: {0}")]
    TemplateShape(String),

    #[error("Bot id {0} out of range (1..=99)")]
    InvalidBotId(u32),

    #[error("Failed to serialize config for bot {bot}")]
    Serialize {
        bot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write progress output")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
