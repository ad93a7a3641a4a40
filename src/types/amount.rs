use crate::types::errors::ValidationError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 2;

/// Largest accepted amount in cents, 999 999 999 999.99.
///
/// Far more of these than a store can ever hold still sum inside `Decimal`'s range.
const MAX_CENTS: i64 = 99_999_999_999_999;

/// A non-negative sum of money held as an exact decimal with two fractional digits.
///
/// Whether the money flows in or out is not part of the amount; that polarity
/// comes from the owning transaction's type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Amount(Decimal::new(0, DECIMAL_PLACES))
    }

    /// Validates `value` and rescales it to two decimal places.
    ///
    /// # Errors
    /// Returns `ValidationError` if the value is negative, carries more than
    /// two significant decimal places or is above the maximum amount.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(value.to_string()))
        }

        if value.normalize().scale() > DECIMAL_PLACES {
            return Err(ValidationError::TooManyDecimalPlaces(value.to_string()))
        }

        if value > Self::max().0 {
            return Err(ValidationError::AmountTooLarge(value.to_string()))
        }

        let mut value = value.abs();
        value.rescale(DECIMAL_PLACES);

        Ok(Amount(value))
    }

    pub fn max() -> Self {
        Amount(Decimal::new(MAX_CENTS, DECIMAL_PLACES))
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ValidationError::Blank { field: "Amount" });
        }

        let decimal = Decimal::from_str(digits)
            .map_err(|error| ValidationError::InvalidAmount(format!("{trimmed} ({error})")))?;

        Amount::new(decimal)
    }
}
