use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("{0} is not available in this environment")]
    Unsupported(&'static str),
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("container #{0} was not found")]
    MissingContainer(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("node list request failed: {0}")]
    Transport(String),
    #[error("node list request returned status {0}")]
    Status(u16),
    #[error("node list payload is malformed: {0}")]
    Decode(String),
    #[error("failed to read node list: {0}")]
    Io(String),
}

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Dom(#[from] DomError),
}
