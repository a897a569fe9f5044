//! Asynchronous, incremental consumption of priced items into a
//! limit-enforcing basket.

pub mod app;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod streaming;
