use super::amount::AmountType;
use super::item::Item;

/// Immutable copy of a basket's state
///
/// Owns its data, so it stays valid after the basket is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketSnapshot<A: AmountType> {
    items: Vec<Item<A>>,
    total: A,
    errors: Vec<String>,
}

impl<A: AmountType> BasketSnapshot<A> {
    pub(crate) fn new(items: Vec<Item<A>>, total: A, errors: Vec<String>) -> Self {
        Self {
            items,
            total,
            errors,
        }
    }

    /// Admitted items in admission order
    pub fn items(&self) -> &[Item<A>] {
        &self.items
    }

    /// Sum of the admitted items' prices
    pub fn total(&self) -> A {
        self.total
    }

    /// One message per rejected item, in rejection order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Names of the admitted items, in admission order
    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Decompose into owned parts
    pub fn into_parts(self) -> (Vec<Item<A>>, A, Vec<String>) {
        (self.items, self.total, self.errors)
    }
}
