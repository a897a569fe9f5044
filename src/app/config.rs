use std::path::PathBuf;
use std::time::Duration;

use super::error::AppError;
use crate::domain::{AmountType, FixedPoint};
use crate::streaming::DEFAULT_LATENCY;

pub const USAGE: &str =
    "Usage: basket [--limit <amount>] [--latency-ms <ms>] [--skip-source-errors] [catalog.csv]";

/// Settings for one demonstration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub limit: FixedPoint,
    /// Simulated delivery latency for the built-in catalog
    pub latency: Duration,
    /// CSV catalog to read instead of the built-in one
    pub catalog: Option<PathBuf>,
    pub skip_source_errors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: FixedPoint::from_raw(10_500_000),
            latency: DEFAULT_LATENCY,
            catalog: None,
            skip_source_errors: false,
        }
    }
}

impl RunConfig {
    /// Parse command-line arguments (the first element is the program name)
    pub fn from_args(args: &[String]) -> Result<Self, AppError> {
        let mut config = Self::default();
        let mut args = args.iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--limit" => {
                    let value = required_value(&mut args, "--limit")?;
                    config.limit = FixedPoint::from_decimal_str(value).map_err(|e| {
                        AppError::InvalidArguments(format!("--limit {}: {}", value, e))
                    })?;
                }
                "--latency-ms" => {
                    let value = required_value(&mut args, "--latency-ms")?;
                    let millis: u64 = value.parse().map_err(|_| {
                        AppError::InvalidArguments(format!("--latency-ms {}: not a number", value))
                    })?;
                    config.latency = Duration::from_millis(millis);
                }
                "--skip-source-errors" => config.skip_source_errors = true,
                "-h" | "--help" => return Err(AppError::InvalidArguments(USAGE.to_string())),
                flag if flag.starts_with("--") => {
                    return Err(AppError::InvalidArguments(format!(
                        "unknown flag {}\n{}",
                        flag, USAGE
                    )));
                }
                path if config.catalog.is_none() => config.catalog = Some(PathBuf::from(path)),
                extra => {
                    return Err(AppError::InvalidArguments(format!(
                        "unexpected argument {}\n{}",
                        extra, USAGE
                    )));
                }
            }
        }

        Ok(config)
    }
}

fn required_value<'a>(
    args: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, AppError> {
    args.next()
        .map(String::as_str)
        .ok_or_else(|| AppError::InvalidArguments(format!("{} requires a value", flag)))
}
