use thiserror::Error;

#[derive(Debug, Error)]
pub enum GangwayError {
    #[error("initializer '{name}' failed")]
    Init {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, GangwayError>;
