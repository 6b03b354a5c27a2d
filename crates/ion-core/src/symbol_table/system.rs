//! The Ion 1.0 system symbol table.

use std::sync::{Arc, OnceLock};

use super::{SymbolTable, SymbolTableKind};
use crate::constants::{ION, SYSTEM_SYMBOLS};

static SYSTEM_TABLE: OnceLock<Arc<SymbolTable>> = OnceLock::new();

/// The process-wide `$ion` version 1 system table (SIDs 1..=9).
pub fn system_symbol_table() -> Arc<SymbolTable> {
    SYSTEM_TABLE
        .get_or_init(|| {
            // Slot 0 is `$0` and is not part of the table.
            let symbols = SYSTEM_SYMBOLS
                .iter()
                .skip(1)
                .map(|s| Some((*s).to_owned()))
                .collect();
            Arc::new(SymbolTable::build_shared(
                SymbolTableKind::System,
                ION.to_owned(),
                1,
                symbols,
            ))
        })
        .clone()
}
