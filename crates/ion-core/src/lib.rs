//! Symbol tables and exact decimal semantics for Amazon Ion.
//!
//! Two independent pieces used by Ion encoders and decoders:
//!
//! - [`SymbolTable`]: the text ↔ SID mapping (local, shared, system and
//!   substitute tables), import chains and catalog resolution.
//! - [`Decimal`] / [`IonDecimal`]: decimals whose structural equivalence is
//!   sensitive to scale and to the sign of zero.
//!
//! Neither reads or writes bytes. Serialization goes through a caller
//! supplied [`IonWriter`].
//!
//! # Example
//!
//! ```
//! use ion_core::{Decimal, IonDecimal, IonValue, SymbolTable};
//!
//! let mut table = SymbolTable::local();
//! let token = table.intern("price").unwrap();
//! assert_eq!(token.sid(), Some(10));
//! assert_eq!(table.find("price"), token);
//!
//! let a = IonDecimal::new("1.0".parse::<Decimal>().unwrap());
//! let b = IonDecimal::new("1.00".parse::<Decimal>().unwrap());
//! assert!(!a.is_equivalent_to(&b));
//! ```

pub mod catalog;
pub mod constants;
pub mod decimal;
mod error;
pub mod symbol_table;
mod symbol_token;
pub mod types;
pub mod value;
pub mod writer;

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;

pub use catalog::{resolve_import, resolve_imports, Catalog, ImportDescriptor, SimpleCatalog};
pub use decimal::Decimal;
pub use error::{IonError, IonResult};
pub use symbol_table::{
    system_symbol_table, DeclaredSymbolNames, DeclaredSymbolNamesIter, SymbolTable,
    SymbolTableKind,
};
pub use symbol_token::{SymbolId, SymbolToken};
pub use types::IonType;
pub use value::{base_equivalent, IonDecimal, IonValue};
pub use writer::IonWriter;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shareable_across_threads() {
        assert_send_sync::<SymbolTable>();
        assert_send_sync::<IonDecimal>();
        assert_send_sync::<SimpleCatalog>();
    }

    #[test]
    fn shared_table_reads_from_many_threads() {
        let table = std::sync::Arc::new(SymbolTable::new_shared("t", 1, ["a", "b"]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                std::thread::spawn(move || table.find_symbol_id("b"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(2));
        }
    }
}
