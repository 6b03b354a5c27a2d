//! Arbitrary-precision decimal with explicit scale and signed zero.
//!
//! [`BigDecimal`] keeps the unscaled digits and the scale exactly as given,
//! so `1.0` and `1.00` are distinct representations of the same number. It
//! has no negative zero, which Ion needs, so [`Decimal`] carries that as a
//! separate flag.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::error::{IonError, IonResult};

/// An exact decimal: `unscaled × 10^-scale`, plus a negative-zero flag.
///
/// `PartialEq` is numeric equality, so `0 == -0` and `1.0 == 1.00`. The
/// stricter structural comparison lives in
/// [`IonDecimal`](crate::value::IonDecimal).
#[derive(Debug, Clone)]
pub struct Decimal {
    value: BigDecimal,
    negative_zero: bool,
}

impl Decimal {
    /// `unscaled × 10^-scale`. A negative scale multiplies by a power of ten.
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Self {
            value: BigDecimal::new(unscaled.into(), scale),
            negative_zero: false,
        }
    }

    /// Negative zero with `scale` fractional digits (`-0.00` has scale 2).
    pub fn negative_zero(scale: i64) -> Self {
        Self {
            value: BigDecimal::new(BigInt::zero(), scale),
            negative_zero: true,
        }
    }

    pub fn scale(&self) -> i64 {
        self.value.as_bigint_and_exponent().1
    }

    /// The integer coefficient. Zero for both signed zeros.
    pub fn unscaled(&self) -> BigInt {
        self.value.as_bigint_and_exponent().0
    }

    pub fn is_negative_zero(&self) -> bool {
        self.negative_zero
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.value
    }

    pub fn into_big_decimal(self) -> BigDecimal {
        self.value
    }

    /// Nearest `f64`, or `None` if out of range. Negative zero maps to `-0.0`.
    pub fn to_f64(&self) -> Option<f64> {
        if self.negative_zero {
            return Some(-0.0);
        }
        self.value.to_f64().filter(|f| f.is_finite())
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Decimal {}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self {
            value,
            negative_zero: false,
        }
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = IonError;

    /// Converts through the shortest decimal string that round-trips to
    /// `value`, so `0.1` becomes `0.1` and not its binary expansion.
    fn try_from(value: f64) -> IonResult<Self> {
        if !value.is_finite() {
            return Err(IonError::InvalidArgument(format!(
                "{value} cannot be represented as a decimal"
            )));
        }
        if value == 0.0 {
            return Ok(if value.is_sign_negative() {
                Self::negative_zero(0)
            } else {
                Self::new(0, 0)
            });
        }
        value.to_string().parse()
    }
}

impl FromStr for Decimal {
    type Err = IonError;

    /// Parses `123`, `-1.50`, `1e3` and the Ion spelling `1d3`. A leading
    /// `-` on a zero value yields negative zero.
    fn from_str(s: &str) -> IonResult<Self> {
        let text = s.trim();
        let normalized = text.replace(|c: char| c == 'd' || c == 'D', "e");
        let value = BigDecimal::from_str(&normalized)
            .map_err(|e| IonError::InvalidArgument(format!("invalid decimal {s:?}: {e}")))?;
        let negative_zero = value.is_zero() && text.starts_with('-');
        Ok(Self {
            value,
            negative_zero,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative_zero {
            f.write_str("-")?;
        }
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_scale() {
        let d: Decimal = "1.00".parse().unwrap();
        assert_eq!(d.scale(), 2);
        assert_eq!(d.unscaled(), BigInt::from(100));
        assert_eq!(d, Decimal::new(1, 0));
    }

    #[test]
    fn parse_ion_exponent() {
        let d: Decimal = "5d1".parse().unwrap();
        assert_eq!(d.scale(), -1);
        assert_eq!(d, Decimal::from(50_i64));
        let d: Decimal = "12.5D-1".parse().unwrap();
        assert_eq!(d, "1.25".parse().unwrap());
    }

    #[test]
    fn parse_negative_zero() {
        let d: Decimal = "-0.00".parse().unwrap();
        assert!(d.is_negative_zero());
        assert_eq!(d.scale(), 2);
        assert!(!"0.00".parse::<Decimal>().unwrap().is_negative_zero());
        assert_eq!(d, Decimal::new(0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "1.2.3".parse::<Decimal>(),
            Err(IonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_f64_is_shortest_round_trip() {
        let d = Decimal::try_from(0.1).unwrap();
        assert_eq!(d.unscaled(), BigInt::from(1));
        assert_eq!(d.scale(), 1);
        let d = Decimal::try_from(-2.5).unwrap();
        assert_eq!(d, Decimal::new(-25, 1));
        assert_eq!(Decimal::try_from(1.0).unwrap().scale(), 0);
    }

    #[test]
    fn from_f64_zero_sign() {
        assert!(Decimal::try_from(-0.0).unwrap().is_negative_zero());
        assert!(!Decimal::try_from(0.0).unwrap().is_negative_zero());
        assert_eq!(Decimal::try_from(-0.0).unwrap().to_f64(), Some(-0.0));
        assert!(Decimal::try_from(-0.0).unwrap().to_f64().unwrap().is_sign_negative());
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(Decimal::try_from(f), Err(IonError::InvalidArgument(_))));
        }
    }

    #[test]
    fn display_marks_negative_zero() {
        assert_eq!(Decimal::negative_zero(0).to_string(), "-0");
        assert_eq!(Decimal::new(-25, 1).to_string(), "-2.5");
    }
}
