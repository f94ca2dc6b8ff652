#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read {0}: {1}")]
    ReadInput(String, String),

    #[error("Failed to bind to {0}: {1}")]
    Bind(String, String),
}
