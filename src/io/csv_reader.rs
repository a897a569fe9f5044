use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawItemRecord;
use crate::domain::{AmountType, Item};

/// Async stream of catalog items from CSV input with a `name,price` header
pub struct CsvCatalogStream<A>
where
    A: AmountType,
{
    inner: Pin<Box<dyn Stream<Item = Result<Item<A>, IoError>> + Send>>,
}

impl<A> CsvCatalogStream<A>
where
    A: AmountType,
{
    /// Create a new catalog stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawItemRecord>()
            .map(|result| result.map_err(IoError::from).and_then(|raw| raw.parse::<A>()));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Open a catalog file and stream its items
    ///
    /// # Example
    /// ```rust,ignore
    /// let stream = CsvCatalogStream::<FixedPoint>::from_file("catalog.csv").await?;
    /// let source = StreamSource::new(stream);
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl<A> Stream for CsvCatalogStream<A>
where
    A: AmountType,
{
    type Item = Result<Item<A>, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
