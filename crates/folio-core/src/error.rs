use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Non-2xx response carrying the server's `message`
    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
