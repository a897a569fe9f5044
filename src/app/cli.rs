use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use super::error::AppError;

/// Output handles passed to the application's main function
pub struct Writers {
    pub stdout: BufWriter<Stdout>,
}

type ArgParser<C> = Box<dyn FnOnce(Vec<String>) -> Result<C, AppError>>;

/// Reusable CLI application runner that handles:
/// - Tracing setup (stderr, `RUST_LOG` aware)
/// - Argument parsing
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp<C> {
    name: String,
    parse_args: ArgParser<C>,
}

impl CliApp<Vec<String>> {
    /// Create a runner that hands the raw arguments to the main function
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parse_args: Box::new(Ok::<Vec<String>, AppError>),
        }
    }
}

impl<C> CliApp<C> {
    /// Parse arguments into a typed configuration before running
    pub fn with_args<D, F>(self, parser: F) -> CliApp<D>
    where
        F: FnOnce(Vec<String>) -> Result<D, AppError> + 'static,
    {
        CliApp {
            name: self.name,
            parse_args: Box::new(parser),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the application on a fresh tokio runtime
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(Writers, C) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        init_tracing();

        let config = match (self.parse_args)(std::env::args().collect()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Error: failed to start runtime: {}", e);
                std::process::exit(1);
            }
        };

        let code = runtime.block_on(async move {
            let writers = Writers {
                stdout: BufWriter::new(tokio::io::stdout()),
            };

            tokio::select! {
                result = main_fn(writers, config) => exit_code(result),
                signal_code = wait_for_signal() => signal_code,
            }
        });

        std::process::exit(code);
    }
}

/// Install the global tracing subscriber, writing to stderr
///
/// Defaults to `basket=info` when `RUST_LOG` is unset. Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basket=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Map the main function's outcome to a process exit code
pub fn exit_code(result: Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let handlers = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        );
        let (mut sigterm, mut sigint, mut sighup) = match handlers {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            _ => {
                warn!("Failed to install signal handlers");
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to install Ctrl+C handler");
            return std::future::pending().await;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}
