use super::amount::AmountType;
use super::item::Item;

/// Hook notified after every successful admission
///
/// Receives the admitted items in insertion order and the new running total.
pub trait BasketObserver<A: AmountType>: Send + Sync {
    fn on_admitted(&self, items: &[Item<A>], total: A);
}

impl<A, F> BasketObserver<A> for F
where
    A: AmountType,
    F: Fn(&[Item<A>], A) + Send + Sync,
{
    fn on_admitted(&self, items: &[Item<A>], total: A) {
        self(items, total)
    }
}
