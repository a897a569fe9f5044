use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::domain::{AmountType, BasketSnapshot};
use crate::io::{IoError, write_result};
use crate::streaming::StopReason;

/// Write the human-readable run summary followed by the CSV rendering
pub async fn write_summary<A, W>(
    result: &BasketSnapshot<A>,
    reason: Option<StopReason>,
    mut writer: W,
) -> Result<(), IoError>
where
    A: AmountType,
    W: AsyncWrite + Unpin + Send,
{
    let mut text = String::from("Final basket contents:\n");
    for item in result.items() {
        text.push_str(&format!("  {} ({})\n", item.name(), item.price()));
    }
    text.push_str(&format!("Total: {}\n", result.total()));
    text.push_str("Errors:\n");
    for error in result.errors() {
        text.push_str(&format!("  {}\n", error));
    }
    match reason {
        Some(StopReason::Exhausted) => text.push_str("Stopped: catalog exhausted\n"),
        Some(StopReason::Full) => text.push_str("Stopped: basket full\n"),
        None => text.push_str("Stopped: source failed\n"),
    }
    text.push('\n');

    writer.write_all(text.as_bytes()).await?;
    write_result(result, writer).await
}
