pub mod amount;
pub mod basket;
pub mod error;
pub mod item;
pub mod observer;
pub mod snapshot;

// Re-export commonly used types
pub use amount::{AmountType, FixedPoint};
pub use basket::Basket;
pub use error::{DomainError, Rejection};
pub use item::Item;
pub use observer::BasketObserver;
pub use snapshot::BasketSnapshot;
