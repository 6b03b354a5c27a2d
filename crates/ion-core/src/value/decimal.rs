//! Nullable, lockable decimal value node.

use std::any::Any;

use bigdecimal::BigDecimal;

use super::{base_equivalent, IonValue, ValueHeader};
use crate::decimal::Decimal;
use crate::error::{IonError, IonResult};
use crate::symbol_token::SymbolToken;
use crate::types::IonType;
use crate::writer::IonWriter;

/// An Ion `decimal` value, possibly `null.decimal`.
#[derive(Debug, Clone)]
pub struct IonDecimal {
    header: ValueHeader,
    value: Option<Decimal>,
}

impl IonDecimal {
    pub fn new(value: impl Into<Decimal>) -> Self {
        Self {
            header: ValueHeader::default(),
            value: Some(value.into()),
        }
    }

    /// `null.decimal`.
    pub fn null() -> Self {
        Self {
            header: ValueHeader::default(),
            value: None,
        }
    }

    pub fn decimal_value(&self) -> IonResult<&Decimal> {
        self.value.as_ref().ok_or(IonError::NullValueAccess)
    }

    pub fn big_decimal_value(&self) -> IonResult<&BigDecimal> {
        self.decimal_value().map(Decimal::as_big_decimal)
    }

    /// The value as the nearest `f64`.
    pub fn f64_value(&self) -> IonResult<f64> {
        let value = self.decimal_value()?;
        value.to_f64().ok_or_else(|| {
            IonError::InvalidOperation(format!("decimal {value} is out of f64 range"))
        })
    }

    pub fn set_value(&mut self, value: impl Into<Decimal>) -> IonResult<()> {
        self.header.check_unlocked()?;
        self.value = Some(value.into());
        Ok(())
    }

    pub fn set_f64_value(&mut self, value: f64) -> IonResult<()> {
        self.header.check_unlocked()?;
        self.value = Some(Decimal::try_from(value)?);
        Ok(())
    }

    pub fn make_null(&mut self) -> IonResult<()> {
        self.header.check_unlocked()?;
        self.value = None;
        Ok(())
    }

    pub fn add_type_annotation(&mut self, text: &str) -> IonResult<()> {
        self.header.add_annotation(SymbolToken::with_text(text))
    }

    pub fn clear_type_annotations(&mut self) -> IonResult<()> {
        self.header.clear_annotations()
    }

    /// Writes annotations, if any, followed by the body.
    pub fn write_to<W: IonWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        if !self.header.annotations().is_empty() {
            writer.set_type_annotations(self.header.annotations())?;
        }
        self.write_body_to(writer)
    }

    /// Writes `null.decimal` or the decimal itself.
    pub fn write_body_to<W: IonWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        match &self.value {
            None => writer.write_null(IonType::Decimal),
            Some(value) => writer.write_decimal(value),
        }
    }
}

impl IonValue for IonDecimal {
    fn ion_type(&self) -> IonType {
        IonType::Decimal
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn is_read_only(&self) -> bool {
        self.header.is_locked()
    }

    fn make_read_only(&mut self) {
        self.header.lock();
    }

    fn type_annotations(&self) -> &[SymbolToken] {
        self.header.annotations()
    }

    /// Negative zero is never equivalent to positive zero. When either side
    /// has fractional digits the scales and coefficients must match exactly
    /// (`1.0` is not `1.00`); otherwise numeric equality decides.
    fn is_equivalent_to(&self, other: &dyn IonValue) -> bool {
        if !base_equivalent(self, other) {
            return false;
        }
        let Some(other) = other.as_any().downcast_ref::<IonDecimal>() else {
            return false;
        };
        let (this, that) = match (&self.value, &other.value) {
            (None, that) => return that.is_none(),
            (Some(_), None) => return false,
            (Some(this), Some(that)) => (this, that),
        };
        if this.is_negative_zero() != that.is_negative_zero() {
            return false;
        }
        if this.scale() > 0 || that.scale() > 0 {
            return this.scale() == that.scale() && this.unscaled() == that.unscaled();
        }
        this == that
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<Decimal> for IonDecimal {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<BigDecimal> for IonDecimal {
    fn from(value: BigDecimal) -> Self {
        Self::new(value)
    }
}

impl From<i64> for IonDecimal {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl TryFrom<f64> for IonDecimal {
    type Error = IonError;

    fn try_from(value: f64) -> IonResult<Self> {
        Decimal::try_from(value).map(Self::new)
    }
}
