use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Frame capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),
}
