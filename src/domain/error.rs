use thiserror::Error;

/// Domain-level errors representing invalid values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Price of {0} must not be negative")]
    NegativePrice(String),
}

/// Reason an item was refused by the basket.
///
/// Rejections are recorded as data in the basket's error log, not raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Cannot add {name}: would exceed limit of {limit}")]
    ExceedsLimit { name: String, limit: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(DomainError::InvalidAmount.to_string(), "Invalid amount");
        assert_eq!(DomainError::Overflow.to_string(), "Arithmetic overflow");
        assert_eq!(
            DomainError::NegativePrice("Refund".to_string()).to_string(),
            "Price of Refund must not be negative"
        );
    }

    #[test]
    fn rejection_names_item_and_limit() {
        let rejection = Rejection::ExceedsLimit {
            name: "Laptop".to_string(),
            limit: "1050".to_string(),
        };
        assert_eq!(
            rejection.to_string(),
            "Cannot add Laptop: would exceed limit of 1050"
        );
    }

    #[test]
    fn error_comparison_works() {
        assert_eq!(DomainError::Overflow, DomainError::Overflow);
        assert_ne!(DomainError::Overflow, DomainError::InvalidAmount);
    }
}
