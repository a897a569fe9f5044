pub mod cli;
pub mod config;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use cli::{CliApp, Writers, init_tracing};
pub use config::RunConfig;
pub use error::AppError;
pub use report::write_summary;
