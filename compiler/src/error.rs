use std::path::PathBuf;

use jvpp_gen_schema::DescriptorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("{} folder is missing", .0.display())]
    MissingOutputDirectory(PathBuf),

    #[error("Unknown wire type \"{type_tag}\" in message \"{message}\"")]
    UnknownWireType {
        message:  String,
        type_tag: String,
    },

    #[error("Message \"{0}\" is defined twice")]
    DuplicateMessage(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
