use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message \"{name}\" has {args} arguments but {types} types")]
    LengthMismatch {
        name:  String,
        args:  usize,
        types: usize,
    },
}
