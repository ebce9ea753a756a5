use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, SignalError>;
