use thiserror::Error;

use crate::domain::{AmountType, BasketSnapshot, DomainError};
use crate::io::IoError;

/// Failure while producing the next item
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Catalog IO error: {0}")]
    Io(#[from] IoError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// A run that ended in `Failed`, carrying the basket state at the moment of failure
#[derive(Error, Debug)]
#[error("Item source failed after {} admitted items: {error}", .basket.items().len())]
pub struct ProcessFailure<A: AmountType> {
    #[source]
    pub error: SourceError,
    pub basket: BasketSnapshot<A>,
}
