use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaUtilError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SchemaUtilError>;

// Helper conversions
impl From<config::ConfigError> for SchemaUtilError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
