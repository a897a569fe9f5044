use std::marker::PhantomData;

use tracing::{debug, info, warn};

use super::error::{ProcessFailure, SourceError};
use super::policy::{AbortOnError, ErrorPolicy};
use super::source::ItemSource;
use crate::domain::{AmountType, Basket, BasketSnapshot};

/// Why a run stopped normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The source reported the end of the sequence
    Exhausted,
    /// An item was rejected while the basket was full
    Full,
}

/// Processor state machine
///
/// Starts in `Running`; `Stopped` and `Failed` are terminal.
#[derive(Debug)]
pub enum ProcessorState {
    Running,
    Stopped(StopReason),
    Failed(SourceError),
}

impl ProcessorState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }
}

/// Final value of a run that stopped normally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport<A: AmountType> {
    pub result: BasketSnapshot<A>,
    pub reason: StopReason,
    /// Items delivered by the source and offered to the basket
    pub presented: usize,
    /// Failed pulls skipped by the error policy
    pub skipped: usize,
}

/// Drives an item source into a basket, one pull at a time
///
/// Each item is fully handled (admission decision plus stop check) before
/// the next pull is issued. A rejection only ends the run when the basket is
/// also full; otherwise cheaper items later in the sequence are still tried.
///
/// # Example
/// ```rust,ignore
/// let source = CatalogSource::new(items);
/// let basket = Basket::new(FixedPoint::from_units(200)?);
///
/// match SequenceProcessor::new(source, basket).process().await {
///     Ok(report) => println!("total: {}", report.result.total()),
///     Err(failure) => eprintln!("{failure}, partial total: {}", failure.basket.total()),
/// }
/// ```
pub struct SequenceProcessor<A, S, P = AbortOnError>
where
    A: AmountType,
    S: ItemSource<A>,
    P: ErrorPolicy,
{
    source: S,
    basket: Basket<A>,
    error_policy: P,
    state: ProcessorState,
    presented: usize,
    skipped: usize,
    _phantom: PhantomData<A>,
}

impl<A, S> SequenceProcessor<A, S, AbortOnError>
where
    A: AmountType,
    S: ItemSource<A>,
{
    /// Create a processor that fails on the first source error
    pub fn new(source: S, basket: Basket<A>) -> Self {
        Self {
            source,
            basket,
            error_policy: AbortOnError,
            state: ProcessorState::Running,
            presented: 0,
            skipped: 0,
            _phantom: PhantomData,
        }
    }
}

impl<A, S, P> SequenceProcessor<A, S, P>
where
    A: AmountType,
    S: ItemSource<A>,
    P: ErrorPolicy,
{
    /// Replace the source error policy (defaults to [`AbortOnError`])
    pub fn with_error_policy<Q: ErrorPolicy>(self, error_policy: Q) -> SequenceProcessor<A, S, Q> {
        SequenceProcessor {
            source: self.source,
            basket: self.basket,
            error_policy,
            state: self.state,
            presented: self.presented,
            skipped: self.skipped,
            _phantom: PhantomData,
        }
    }

    /// Perform a single pull and apply its outcome
    ///
    /// Does nothing once a terminal state has been reached.
    pub async fn step(&mut self) -> &ProcessorState {
        if self.state.is_terminal() {
            return &self.state;
        }

        match self.source.next().await {
            Ok(Some(item)) => {
                self.presented += 1;
                let admitted = self.basket.add(item);
                if !admitted && self.basket.is_full() {
                    info!(
                        presented = self.presented,
                        total = %self.basket.total(),
                        "Basket full, stopping"
                    );
                    self.state = ProcessorState::Stopped(StopReason::Full);
                }
            }
            Ok(None) => {
                info!(
                    presented = self.presented,
                    total = %self.basket.total(),
                    "Source exhausted"
                );
                self.state = ProcessorState::Stopped(StopReason::Exhausted);
            }
            Err(error) => {
                if self.error_policy.handle_source_error(&error) {
                    self.skipped += 1;
                    debug!(skipped = self.skipped, "Skipped failed pull");
                } else {
                    warn!(
                        presented = self.presented,
                        total = %self.basket.total(),
                        "Processing failed"
                    );
                    self.state = ProcessorState::Failed(error);
                }
            }
        }

        &self.state
    }

    /// Pull until a terminal state and return the final snapshot
    ///
    /// A source failure is returned as a [`ProcessFailure`] carrying the
    /// basket state at the moment of failure.
    pub async fn process(mut self) -> Result<ProcessReport<A>, ProcessFailure<A>> {
        loop {
            self.step().await;

            match std::mem::replace(&mut self.state, ProcessorState::Running) {
                ProcessorState::Running => continue,
                ProcessorState::Stopped(reason) => {
                    return Ok(ProcessReport {
                        result: self.basket.into_result(),
                        reason,
                        presented: self.presented,
                        skipped: self.skipped,
                    });
                }
                ProcessorState::Failed(error) => {
                    return Err(ProcessFailure {
                        error,
                        basket: self.basket.into_result(),
                    });
                }
            }
        }
    }

    pub fn state(&self) -> &ProcessorState {
        &self.state
    }

    /// Read access to the basket mid-run
    pub fn basket(&self) -> &Basket<A> {
        &self.basket
    }

    pub fn presented(&self) -> usize {
        self.presented
    }
}
