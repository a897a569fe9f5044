use basket::prelude::*;
use basket::app::write_summary;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

fn main() {
    CliApp::new("basket")
        .with_args(|args| RunConfig::from_args(&args))
        .run(run_basket);
}

/// Built-in demonstration catalog
fn sample_catalog() -> Result<Vec<Item<FixedPoint>>, DomainError> {
    [
        ("Laptop", 1500),
        ("Mouse", 25),
        ("Keyboard", 100),
        ("HDMI cable", 10),
        ("Bag", 50),
        ("Mouse pad", 5),
    ]
    .into_iter()
    .map(|(name, units)| Item::new(name, FixedPoint::from_units(units)?))
    .collect()
}

/// Fill a basket from the configured catalog and print the outcome
async fn run_basket(mut writers: Writers, config: RunConfig) -> Result<(), AppError> {
    let basket = Basket::new(config.limit).with_observer(
        |items: &[Item<FixedPoint>], total: FixedPoint| {
            debug!(items = items.len(), %total, "Basket updated");
        },
    );

    let outcome = match &config.catalog {
        Some(path) => {
            let stream = CsvCatalogStream::<FixedPoint>::from_file(path).await?;
            fill(StreamSource::new(stream), basket, config.skip_source_errors).await
        }
        None => {
            let source = CatalogSource::new(sample_catalog()?).with_latency(config.latency);
            fill(source, basket, config.skip_source_errors).await
        }
    };

    match outcome {
        Ok(report) => {
            write_summary(&report.result, Some(report.reason), &mut writers.stdout).await?;
            Ok(())
        }
        Err(failure) => {
            warn!(error = %failure.error, "Run failed, reporting partial basket");
            write_summary(&failure.basket, None, &mut writers.stdout).await?;
            writers.stdout.flush().await?;
            Err(failure.error.into())
        }
    }
}

async fn fill<S>(
    source: S,
    basket: Basket<FixedPoint>,
    skip_source_errors: bool,
) -> Result<ProcessReport<FixedPoint>, ProcessFailure<FixedPoint>>
where
    S: ItemSource<FixedPoint>,
{
    let processor = SequenceProcessor::new(source, basket);
    if skip_source_errors {
        processor.with_error_policy(SkipErrors).process().await
    } else {
        processor.process().await
    }
}
