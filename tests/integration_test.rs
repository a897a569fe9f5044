use std::sync::{Arc, Mutex};
use std::time::Duration;

use basket::prelude::*;
use futures::io::Cursor;
use futures::stream;

fn units(n: i64) -> FixedPoint {
    FixedPoint::from_units(n).expect("price in range")
}

/// The six-item sample catalog, in delivery order
fn purchase() -> Vec<Item<FixedPoint>> {
    [
        ("Laptop", 1500),
        ("Mouse", 25),
        ("Keyboard", 100),
        ("HDMI cable", 10),
        ("Bag", 50),
        ("Mouse pad", 5),
    ]
    .into_iter()
    .map(|(name, price)| Item::new(name, units(price)).expect("valid item"))
    .collect()
}

async fn run(items: Vec<Item<FixedPoint>>, limit: i64) -> ProcessReport<FixedPoint> {
    let source = CatalogSource::new(items).with_latency(Duration::ZERO);
    SequenceProcessor::new(source, Basket::new(units(limit)))
        .process()
        .await
        .expect("catalog source never fails")
}

#[tokio::test]
async fn expensive_first_item_is_skipped_and_rest_fit() {
    let report = run(purchase(), 200).await;

    assert_eq!(report.reason, StopReason::Exhausted);
    assert_eq!(
        report.result.item_names(),
        vec!["Mouse", "Keyboard", "HDMI cable", "Bag", "Mouse pad"]
    );
    assert_eq!(report.result.total(), units(190));
    assert_eq!(
        report.result.errors(),
        ["Cannot add Laptop: would exceed limit of 200".to_string()]
    );
}

#[tokio::test]
async fn partial_admission_under_1050() {
    let report = run(purchase(), 1050).await;

    assert!(report.result.total() <= units(1050));
    assert!(!report.result.errors().is_empty());
    assert_eq!(
        report.result.item_names(),
        vec!["Mouse", "Keyboard", "HDMI cable", "Bag", "Mouse pad"]
    );
    assert_eq!(report.result.errors().len(), 1);
    assert!(report.result.errors()[0].contains("Laptop"));
    assert!(report.result.errors()[0].contains("1050"));

    // Same input, same outcome
    assert_eq!(run(purchase(), 1050).await, report);
}

#[tokio::test]
async fn everything_fits_without_errors() {
    let report = run(purchase(), 1690).await;

    assert_eq!(report.reason, StopReason::Exhausted);
    assert!(report.result.errors().is_empty());
    assert_eq!(report.result.items().len(), 6);
    assert_eq!(report.result.total(), units(1690));
}

#[tokio::test]
async fn full_basket_stops_pulling() {
    let items = vec![
        Item::new("Keyboard", units(100)).unwrap(),
        Item::new("Bag", units(50)).unwrap(),
        Item::new("Mouse", units(25)).unwrap(),
        Item::new("Mouse pad", units(5)).unwrap(),
    ];

    let report = run(items, 150).await;

    assert_eq!(report.reason, StopReason::Full);
    assert_eq!(report.presented, 3);
    assert_eq!(report.result.item_names(), vec!["Keyboard", "Bag"]);
    assert_eq!(report.result.errors().len(), 1);
}

#[tokio::test]
async fn source_failure_mid_sequence_keeps_partial_state() {
    let mut items: Vec<Result<Item<FixedPoint>, SourceError>> =
        purchase().into_iter().map(Ok).collect();
    items.insert(3, Err(SourceError::Unavailable("network down".to_string())));

    let failure = SequenceProcessor::new(
        StreamSource::new(stream::iter(items)),
        Basket::new(units(200)),
    )
    .process()
    .await
    .expect_err("injected failure must surface");

    assert_eq!(failure.basket.item_names(), vec!["Mouse", "Keyboard"]);
    assert_eq!(failure.basket.total(), units(125));
    assert_eq!(failure.basket.errors().len(), 1);
    assert!(failure.to_string().contains("network down"));
}

#[tokio::test]
async fn observer_runs_after_each_admission() {
    let totals = Arc::new(Mutex::new(Vec::new()));
    let sink = totals.clone();
    let basket = Basket::new(units(200)).with_observer(
        move |_: &[Item<FixedPoint>], total: FixedPoint| sink.lock().unwrap().push(total),
    );

    SequenceProcessor::new(
        CatalogSource::new(purchase()).with_latency(Duration::ZERO),
        basket,
    )
    .process()
    .await
    .unwrap();

    assert_eq!(
        *totals.lock().unwrap(),
        vec![units(25), units(125), units(135), units(185), units(190)]
    );
}

#[tokio::test]
async fn csv_catalog_feeds_processor() {
    let csv = "\
name,price
Laptop,1500
Mouse,25
Keyboard,100
";
    let catalog = CsvCatalogStream::<FixedPoint>::new(Cursor::new(csv.as_bytes()));

    let report = SequenceProcessor::new(StreamSource::new(catalog), Basket::new(units(200)))
        .process()
        .await
        .unwrap();

    assert_eq!(report.result.item_names(), vec!["Mouse", "Keyboard"]);

    let mut output = Vec::new();
    write_result(&report.result, &mut output).await.unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "name,price\nMouse,25.0000\nKeyboard,100.0000\n"
    );
}

#[tokio::test]
async fn malformed_csv_row_fails_run_by_default_and_skips_on_request() {
    let csv = "name,price\nMouse,25\nBag,cheap\nMouse pad,5\n";

    let failure = SequenceProcessor::new(
        StreamSource::new(CsvCatalogStream::<FixedPoint>::new(Cursor::new(csv.as_bytes()))),
        Basket::new(units(200)),
    )
    .process()
    .await
    .unwrap_err();
    assert!(matches!(
        failure.error,
        SourceError::Io(IoError::InvalidPrice(_))
    ));
    assert_eq!(failure.basket.item_names(), vec!["Mouse"]);

    let report = SequenceProcessor::new(
        StreamSource::new(CsvCatalogStream::<FixedPoint>::new(Cursor::new(csv.as_bytes()))),
        Basket::new(units(200)),
    )
    .with_error_policy(SkipErrors)
    .process()
    .await
    .unwrap();
    assert_eq!(report.result.item_names(), vec!["Mouse", "Mouse pad"]);
    assert_eq!(report.skipped, 1);
}

#[tokio::test(start_paused = true)]
async fn default_latency_applies_to_every_item() {
    let started = tokio::time::Instant::now();

    SequenceProcessor::new(CatalogSource::new(purchase()), Basket::new(units(200)))
        .process()
        .await
        .unwrap();

    assert!(started.elapsed() >= DEFAULT_LATENCY * 6);
}

#[tokio::test]
async fn separate_runs_are_independent() {
    let (small, large) = tokio::join!(run(purchase(), 200), run(purchase(), 1690));

    assert_eq!(small.result.total(), units(190));
    assert_eq!(large.result.total(), units(1690));
}
