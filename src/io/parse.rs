use serde::Deserialize;

use super::error::IoError;
use crate::domain::{AmountType, Item};

/// Raw CSV record as read from a catalog file
#[derive(Debug, Deserialize)]
pub struct RawItemRecord {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl RawItemRecord {
    /// Parse this raw record into a validated Item
    pub fn parse<A: AmountType>(self) -> Result<Item<A>, IoError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| IoError::MissingField("name".to_string()))?;

        let price_str = self
            .price
            .ok_or_else(|| IoError::MissingField(format!("price required for {}", name)))?;
        let price =
            A::from_decimal_str(&price_str).map_err(|_| IoError::InvalidPrice(price_str))?;

        Ok(Item::new(name.trim(), price)?)
    }
}
