//! Integer rupiah price type.
//!
//! Prices are whole Indonesian rupiah held as an `i64`. All arithmetic stays
//! in integers, so repeated additions never drift the way floating point
//! would. Display groups thousands with `.` in the Indonesian convention
//! ("450.000"); currency-prefixed rendering ("Rp 450.000") is a presentation
//! concern layered on top.

use core::fmt;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A price in whole Indonesian rupiah.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupiah amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying rupiah amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a line quantity, saturating at the numeric limits.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Formats the amount with `.` thousands separators, e.g. `1.305.000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        let mut remaining = digits.len();
        for ch in digits.chars() {
            write!(f, "{ch}")?;
            remaining -= 1;
            if remaining > 0 && remaining % 3 == 0 {
                write!(f, ".")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::new(0).to_string(), "0");
        assert_eq!(Price::new(950).to_string(), "950");
        assert_eq!(Price::new(1_000).to_string(), "1.000");
        assert_eq!(Price::new(25_000).to_string(), "25.000");
        assert_eq!(Price::new(450_000).to_string(), "450.000");
        assert_eq!(Price::new(1_305_000).to_string(), "1.305.000");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::new(-25_000).to_string(), "-25.000");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::new(450_000).times(2), Price::new(900_000));
        assert_eq!(Price::new(450_000).times(0), Price::ZERO);
    }

    #[test]
    fn test_repeated_addition_is_exact() {
        // 1000 additions of the same unit amount sum exactly
        let mut total = Price::ZERO;
        for _ in 0..1000 {
            total += Price::new(100);
        }
        assert_eq!(total, Price::new(100_000));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(900_000), Price::new(380_000), Price::new(25_000)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(1_305_000));
    }

    #[test]
    fn test_serde_transparent() {
        let price: Price = serde_json::from_str("450000").unwrap();
        assert_eq!(price, Price::new(450_000));
        assert_eq!(serde_json::to_string(&price).unwrap(), "450000");
    }
}
