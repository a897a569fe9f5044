use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, Fuse};
use futures::{Stream, StreamExt};

use super::error::SourceError;
use crate::domain::{AmountType, Item};

/// Default simulated latency per delivered item
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Pull-based asynchronous sequence of items
///
/// `Ok(Some(item))` delivers the next item; `Ok(None)` marks the end of the
/// sequence and must be returned on every call after exhaustion. Taking
/// `&mut self` means a caller cannot issue a second pull while one is in
/// flight.
#[async_trait]
pub trait ItemSource<A: AmountType>: Send {
    async fn next(&mut self) -> Result<Option<Item<A>>, SourceError>;
}

/// Finite source over a fixed backing list, with simulated delivery latency
///
/// Not restartable: iterate again with a fresh instance.
///
/// # Cancel safety
/// Not cancel-safe. The cursor advances when a pull starts, so dropping a
/// `next()` future during its latency sleep discards that item.
#[derive(Debug)]
pub struct CatalogSource<A: AmountType> {
    pending: VecDeque<Item<A>>,
    position: usize,
    len: usize,
    latency: Duration,
}

impl<A: AmountType> CatalogSource<A> {
    pub fn new(items: impl IntoIterator<Item = Item<A>>) -> Self {
        let pending: VecDeque<_> = items.into_iter().collect();
        Self {
            len: pending.len(),
            pending,
            position: 0,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Set the suspension applied before each delivery (zero disables it)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of items delivered so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Size of the backing list
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}

#[async_trait]
impl<A: AmountType> ItemSource<A> for CatalogSource<A> {
    async fn next(&mut self) -> Result<Option<Item<A>>, SourceError> {
        let Some(item) = self.pending.pop_front() else {
            return Ok(None);
        };
        self.position += 1;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Some(item))
    }
}

/// Adapts any stream of fallible items into an [`ItemSource`]
///
/// The stream is fused, so once it ends every later pull reports exhaustion.
pub struct StreamSource<S: Stream> {
    inner: Fuse<S>,
}

impl<S: Stream> StreamSource<S> {
    pub fn new(stream: S) -> Self {
        Self {
            inner: stream.fuse(),
        }
    }
}

#[async_trait]
impl<A, S, E> ItemSource<A> for StreamSource<S>
where
    A: AmountType,
    S: Stream<Item = Result<Item<A>, E>> + Unpin + Send,
    E: Into<SourceError> + Send,
{
    async fn next(&mut self) -> Result<Option<Item<A>>, SourceError> {
        self.inner.next().await.transpose().map_err(Into::into)
    }
}

/// Expose a source as a [`Stream`], ending at exhaustion
///
/// Errors are yielded in place and pulling continues after them.
pub fn into_stream<A, S>(source: S) -> impl Stream<Item = Result<Item<A>, SourceError>> + Send
where
    A: AmountType,
    S: ItemSource<A> + 'static,
{
    stream::unfold(source, |mut source| async move {
        match ItemSource::next(&mut source).await {
            Ok(Some(item)) => Some((Ok(item), source)),
            Ok(None) => None,
            Err(e) => Some((Err(e), source)),
        }
    })
}
