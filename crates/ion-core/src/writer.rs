//! Writer abstraction consumed by symbol tables and values.
//!
//! The crate never serializes bytes itself. Symbol-table headers and value
//! bodies are emitted as a sequence of calls on an [`IonWriter`], and any
//! error the writer returns is handed back to the caller untouched.

use crate::decimal::Decimal;
use crate::error::IonError;
use crate::symbol_token::SymbolToken;
use crate::types::IonType;

pub trait IonWriter {
    /// The writer's own failure type. Errors raised by this crate before
    /// any output is produced are converted into it.
    type Error: From<IonError>;

    /// Annotations applied to the next value written.
    fn set_type_annotations(&mut self, annotations: &[SymbolToken]) -> Result<(), Self::Error>;

    /// Field name applied to the next value written inside a struct.
    fn set_field_name(&mut self, name: &str) -> Result<(), Self::Error>;

    fn step_in(&mut self, container: IonType) -> Result<(), Self::Error>;

    fn step_out(&mut self) -> Result<(), Self::Error>;

    fn write_null(&mut self, ion_type: IonType) -> Result<(), Self::Error>;

    fn write_int(&mut self, value: i64) -> Result<(), Self::Error>;

    fn write_string(&mut self, value: &str) -> Result<(), Self::Error>;

    fn write_decimal(&mut self, value: &Decimal) -> Result<(), Self::Error>;
}
