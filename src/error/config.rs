use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),
}
