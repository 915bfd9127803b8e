use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("site {site} returned status {status}")]
    BadStatus { site: String, status: u16 },

    #[error("site {site} returned an empty body")]
    EmptyBody { site: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sites file error: {0}")]
    SitesFile(#[from] toml::de::Error),

    #[error("Invalid selector for {field}: '{selector}': {reason}")]
    InvalidSelector {
        field: String,
        selector: String,
        reason: String,
    },

    #[error("Configuration error: {field} = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScoutError>;
