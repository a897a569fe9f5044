use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::{AmountType, BasketSnapshot};

/// Write a basket result as CSV
///
/// One `name,price` row per admitted item, in admission order. The caller's
/// writer is flushed before returning.
pub async fn write_result<A, W>(result: &BasketSnapshot<A>, mut writer: W) -> Result<(), IoError>
where
    A: AmountType,
    W: AsyncWrite + Unpin + Send,
{
    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    csv_writer.write_record(["name", "price"])?;
    for item in result.items() {
        csv_writer.write_record([item.name(), item.price().to_decimal_string().as_str()])?;
    }

    let buffer = csv_writer
        .into_inner()
        .map_err(|e| IoError::Io(e.into_error()))?;

    writer.write_all(&buffer).await?;
    writer.flush().await?;
    Ok(())
}
