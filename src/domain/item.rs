use super::amount::AmountType;
use super::error::DomainError;

/// A named, priced unit eligible for admission into a basket.
///
/// Fields are private so a constructed item always has a non-negative price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<A: AmountType> {
    name: String,
    price: A,
}

impl<A: AmountType> Item<A> {
    /// Create a new item, rejecting negative prices
    pub fn new(name: impl Into<String>, price: A) -> Result<Self, DomainError> {
        let name = name.into();
        if price < A::zero() {
            return Err(DomainError::NegativePrice(name));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> A {
        self.price
    }
}
