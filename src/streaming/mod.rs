pub mod error;
pub mod policy;
pub mod processor;
pub mod source;

// Re-export commonly used types
pub use error::{ProcessFailure, SourceError};
pub use policy::{AbortOnError, ErrorPolicy, SkipErrors};
pub use processor::{ProcessReport, ProcessorState, SequenceProcessor, StopReason};
pub use source::{CatalogSource, DEFAULT_LATENCY, ItemSource, StreamSource, into_stream};
