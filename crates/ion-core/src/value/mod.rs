//! The value-node contract shared by Ion values.

use std::any::Any;
use std::fmt;

use crate::error::{IonError, IonResult};
use crate::symbol_token::SymbolToken;
use crate::types::IonType;

mod decimal;

pub use decimal::IonDecimal;

/// Behavior common to every value node in a document tree.
pub trait IonValue: Any + fmt::Debug {
    fn ion_type(&self) -> IonType;

    fn is_null(&self) -> bool;

    fn is_read_only(&self) -> bool;

    /// Locks the value against further mutation. Idempotent.
    fn make_read_only(&mut self);

    fn type_annotations(&self) -> &[SymbolToken];

    /// Structural equivalence, which is stricter than numeric equality.
    fn is_equivalent_to(&self, other: &dyn IonValue) -> bool;

    fn as_any(&self) -> &dyn Any;
}

/// The type-independent part of [`IonValue::is_equivalent_to`]: same type
/// tag and the same annotations in the same order.
pub fn base_equivalent(this: &dyn IonValue, other: &dyn IonValue) -> bool {
    this.ion_type() == other.ion_type()
        && annotations_equivalent(this.type_annotations(), other.type_annotations())
}

/// Annotations match on text; SIDs are only compared when text is unknown on
/// both sides.
fn annotations_equivalent(left: &[SymbolToken], right: &[SymbolToken]) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|(l, r)| match (l.text(), r.text()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => l.sid() == r.sid(),
            _ => false,
        })
}

/// Lock flag and annotations carried by every value node.
#[derive(Debug, Clone, Default)]
pub(crate) struct ValueHeader {
    locked: bool,
    annotations: Vec<SymbolToken>,
}

impl ValueHeader {
    pub(crate) fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }

    pub(crate) fn check_unlocked(&self) -> IonResult<()> {
        if self.locked {
            return Err(IonError::ValueLocked);
        }
        Ok(())
    }

    pub(crate) fn annotations(&self) -> &[SymbolToken] {
        &self.annotations
    }

    pub(crate) fn add_annotation(&mut self, annotation: SymbolToken) -> IonResult<()> {
        self.check_unlocked()?;
        self.annotations.push(annotation);
        Ok(())
    }

    pub(crate) fn clear_annotations(&mut self) -> IonResult<()> {
        self.check_unlocked()?;
        self.annotations.clear();
        Ok(())
    }
}
