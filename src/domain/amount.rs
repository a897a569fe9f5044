use std::fmt;

use super::error::DomainError;

/// Trait representing a price or limit with fixed precision
///
/// `Display` renders the short human form used in messages, while
/// `to_decimal_string` renders the fixed-width form used in CSV output.
pub trait AmountType:
    Copy + Ord + Default + Send + Sync + fmt::Debug + fmt::Display + 'static
{
    /// Parse from decimal string (e.g., "1.5000")
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Convert to decimal string with 4 decimal places
    fn to_decimal_string(&self) -> String;

    /// Checked addition, returns None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on underflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;
}

/// Fixed-point decimal representation using i64 (multiply by 10,000)
/// Represents amounts with 4 decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;

    /// Create from raw scaled value (for internal use)
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a whole number of currency units
    pub fn from_units(units: i64) -> Result<Self, DomainError> {
        units
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(DomainError::Overflow)
    }

    /// Get raw scaled value
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl AmountType for FixedPoint {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            Some((int, dec)) if !dec.contains('.') => (int, dec),
            Some(_) => return Err(DomainError::InvalidAmount),
            None => (s, ""),
        };

        // i64::parse accepts its own sign, so digits are checked up front
        if integer_part.is_empty() || !integer_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount);
        }
        if decimal_part.len() > 4 || !decimal_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part.parse().map_err(|_| DomainError::Overflow)?;

        // Pad to 4 digits so "1.5" means 1.5000
        let decimal: i64 = format!("{:0<4}", decimal_part)
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    fn to_decimal_string(&self) -> String {
        let abs_value = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, abs_value / scale, abs_value % scale)
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = self.to_decimal_string();
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}
