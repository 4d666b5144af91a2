use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failures the activity generator absorbs. The user always receives a
/// fully-formed activity, sourced from the remote service or from defaults.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}
