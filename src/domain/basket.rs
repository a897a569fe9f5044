use std::fmt;

use tracing::debug;

use super::amount::AmountType;
use super::error::Rejection;
use super::item::Item;
use super::observer::BasketObserver;
use super::snapshot::BasketSnapshot;

/// Capacity-bounded accumulator enforcing a cumulative spending limit
///
/// Every presented item ends up either in `items` (and counted in `total`)
/// or as exactly one entry in `errors`. `total <= limit` holds after every
/// call to [`Basket::add`].
pub struct Basket<A: AmountType> {
    limit: A,
    items: Vec<Item<A>>,
    total: A,
    errors: Vec<String>,
    observer: Option<Box<dyn BasketObserver<A>>>,
}

impl<A: AmountType> Basket<A> {
    /// Create an empty basket with a fixed limit
    ///
    /// A negative limit rejects every item.
    pub fn new(limit: A) -> Self {
        Self {
            limit,
            items: Vec::new(),
            total: A::zero(),
            errors: Vec::new(),
            observer: None,
        }
    }

    /// Attach an observer invoked after each admission
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: BasketObserver<A> + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Offer an item to the basket
    ///
    /// Returns `true` if admitted. A rejected item leaves the basket
    /// unchanged apart from one new entry in the error log.
    pub fn add(&mut self, item: Item<A>) -> bool {
        match self.admit(&item) {
            Ok(new_total) => {
                debug!(item = item.name(), price = %item.price(), total = %new_total, "Admitted item");
                self.total = new_total;
                self.items.push(item);
                if let Some(observer) = &self.observer {
                    observer.on_admitted(&self.items, self.total);
                }
                true
            }
            Err(rejection) => {
                debug!(item = item.name(), price = %item.price(), limit = %self.limit, "Rejected item");
                self.errors.push(rejection.to_string());
                false
            }
        }
    }

    /// Compute the total after admitting `item`, or why it cannot be admitted
    fn admit(&self, item: &Item<A>) -> Result<A, Rejection> {
        // Overflowing the amount type cannot fit under any limit
        self.total
            .checked_add(item.price())
            .filter(|new_total| *new_total <= self.limit)
            .ok_or_else(|| Rejection::ExceedsLimit {
                name: item.name().to_string(),
                limit: self.limit.to_string(),
            })
    }

    /// True once the running total has reached the limit
    ///
    /// Independent of the per-item gate in [`Basket::add`].
    pub fn is_full(&self) -> bool {
        self.total >= self.limit
    }

    /// Immutable snapshot of the current state; repeated calls return equal values
    pub fn result(&self) -> BasketSnapshot<A> {
        BasketSnapshot::new(self.items.clone(), self.total, self.errors.clone())
    }

    /// Consume the basket and return its final state without cloning
    pub fn into_result(self) -> BasketSnapshot<A> {
        BasketSnapshot::new(self.items, self.total, self.errors)
    }

    pub fn limit(&self) -> A {
        self.limit
    }

    pub fn total(&self) -> A {
        self.total
    }

    pub fn items(&self) -> &[Item<A>] {
        &self.items
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Headroom left under the limit, floored at zero
    pub fn remaining(&self) -> A {
        self.limit
            .checked_sub(self.total)
            .filter(|left| *left > A::zero())
            .unwrap_or_else(A::zero)
    }
}

impl<A: AmountType> fmt::Debug for Basket<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Basket")
            .field("limit", &self.limit)
            .field("items", &self.items)
            .field("total", &self.total)
            .field("errors", &self.errors)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
