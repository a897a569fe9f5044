//! Prelude module for convenient imports
//!
//! Import everything you need with: `use basket::prelude::*;`

// Domain types
pub use crate::domain::{
    AmountType, Basket, BasketObserver, BasketSnapshot, DomainError, FixedPoint, Item, Rejection,
};

// IO types
pub use crate::io::{CsvCatalogStream, IoError, RawItemRecord, write_result};

// Streaming types
pub use crate::streaming::{
    AbortOnError, CatalogSource, DEFAULT_LATENCY, ErrorPolicy, ItemSource, ProcessFailure, ProcessReport,
    ProcessorState, SequenceProcessor, SkipErrors, SourceError, StopReason, StreamSource,
    into_stream,
};

// App types
pub use crate::app::{AppError, CliApp, RunConfig, Writers};
