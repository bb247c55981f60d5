use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("hop key {key:?} is not numeric")]
    InvalidKeyKind { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    #[error("hop key {key} is not present in the hop map")]
    MissingKey { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HopsError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Flatten(#[from] FlattenError),
}
