//! Ion symbol tables.
//!
//! One structure covers all four table kinds (local, shared, system and
//! substitute); [`SymbolTableKind`] selects which invariants apply.
//!
//! SIDs are 1-based. A local table's SID space is laid out as the system
//! table first, then each import in declared order, then the table's own
//! symbols:
//!
//! ```text
//! 1 ..= system.max_id | import[0] | import[1] | ... | own symbols
//!                     ^-------- imported_max_id --------^
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::constants::ION_1_0;
use crate::symbol_token::{SymbolId, SymbolToken};

mod declared;
mod local;
mod shared;
mod system;

pub use declared::{DeclaredSymbolNames, DeclaredSymbolNamesIter};
pub use system::system_symbol_table;

/// Which of the four symbol table roles a [`SymbolTable`] plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolTableKind {
    /// Unnamed, unversioned, mutable until frozen.
    Local,
    /// Named, versioned, read-only.
    Shared,
    /// The shared table predefined by the format (`$ion`).
    System,
    /// Stands in for a shared import with no exact catalog match.
    Substitute,
}

/// Bidirectional text ↔ SID mapping.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    kind: SymbolTableKind,
    name: Option<String>,
    version: u32,
    system: Option<Arc<SymbolTable>>,
    imports: Vec<Arc<SymbolTable>>,
    imported_max_id: SymbolId,
    /// Own symbols; index `i` holds SID `imported_max_id + 1 + i`.
    symbols: Vec<Option<String>>,
    /// Reverse lookup over own symbols. The lowest SID wins for duplicates.
    ids: HashMap<String, SymbolId>,
    read_only: bool,
}

impl SymbolTable {
    pub fn kind(&self) -> SymbolTableKind {
        self.kind
    }

    /// Table name; `None` for local tables.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Table version; `0` for local tables.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_local(&self) -> bool {
        self.kind == SymbolTableKind::Local
    }

    /// System and substitute tables are shared as well.
    pub fn is_shared(&self) -> bool {
        !self.is_local()
    }

    pub fn is_system(&self) -> bool {
        self.kind == SymbolTableKind::System
    }

    pub fn is_substitute(&self) -> bool {
        self.kind == SymbolTableKind::Substitute
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn ion_version_id(&self) -> &'static str {
        ION_1_0
    }

    /// Highest SID this table can resolve. Larger SIDs never have text.
    pub fn max_id(&self) -> SymbolId {
        self.imported_max_id + self.symbols.len()
    }

    /// Highest SID contributed by the system table and the imports. Zero for
    /// shared tables.
    pub fn imported_max_id(&self) -> SymbolId {
        self.imported_max_id
    }

    /// Imports in declared order, excluding the system table.
    pub fn imported_tables(&self) -> &[Arc<SymbolTable>] {
        &self.imports
    }

    /// The system table a local table was built on.
    pub fn system_table(&self) -> Option<&Arc<SymbolTable>> {
        self.system.as_ref()
    }

    /// Prevents any further symbols from being added. Idempotent.
    pub fn make_read_only(&mut self) {
        if !self.read_only {
            debug!(max_id = self.max_id(), "symbol table made read-only");
            self.read_only = true;
        }
    }

    /// Looks up `text` in own symbols, then the imports in declared order,
    /// then the system table. Returns [`SymbolToken::UNKNOWN`] on a miss.
    pub fn find(&self, text: &str) -> SymbolToken {
        match self.find_symbol_id(text) {
            Some(sid) => SymbolToken::new(text, sid),
            None => SymbolToken::UNKNOWN,
        }
    }

    /// Like [`find`](Self::find) but returns only the SID.
    pub fn find_symbol_id(&self, text: &str) -> Option<SymbolId> {
        if let Some(&sid) = self.ids.get(text) {
            return Some(sid);
        }
        let mut offset = self.system_max_id();
        for import in &self.imports {
            if let Some(sid) = import.find_symbol_id(text) {
                return Some(offset + sid);
            }
            offset += import.max_id();
        }
        self.system.as_ref().and_then(|system| system.find_symbol_id(text))
    }

    /// Reverse lookup. Returns `None` for SID 0, SIDs above
    /// [`max_id`](Self::max_id) and SIDs reserved without text.
    pub fn find_known_symbol(&self, sid: SymbolId) -> Option<&str> {
        if sid == 0 || sid > self.max_id() {
            return None;
        }
        if sid > self.imported_max_id {
            return self.symbols[sid - self.imported_max_id - 1].as_deref();
        }
        let mut relative = sid;
        if let Some(system) = &self.system {
            if relative <= system.max_id() {
                return system.find_known_symbol(relative);
            }
            relative -= system.max_id();
        }
        for import in &self.imports {
            if relative <= import.max_id() {
                return import.find_known_symbol(relative);
            }
            relative -= import.max_id();
        }
        None
    }

    /// Snapshot of the own symbols in ascending SID order, starting at
    /// `imported_max_id + 1`. Undefined SIDs appear as `None`.
    pub fn declared_symbol_names(&self) -> DeclaredSymbolNames {
        DeclaredSymbolNames::snapshot(self.imported_max_id + 1, &self.symbols)
    }

    fn system_max_id(&self) -> SymbolId {
        self.system.as_ref().map_or(0, |system| system.max_id())
    }

    fn debug_check_invariants(&self) {
        debug_assert!(!self.is_local() || (self.name.is_none() && self.version == 0));
        debug_assert!(!self.is_shared() || self.read_only);
        debug_assert!(!self.is_shared() || (self.imports.is_empty() && self.system.is_none()));
        debug_assert!(self.max_id() >= self.imported_max_id);
    }
}

/// Builds the text → SID index for `symbols`, the first of which has SID
/// `first_sid`.
fn index_symbols(symbols: &[Option<String>], first_sid: SymbolId) -> HashMap<String, SymbolId> {
    let mut ids = HashMap::with_capacity(symbols.len());
    for (i, symbol) in symbols.iter().enumerate() {
        if let Some(text) = symbol {
            ids.entry(text.clone()).or_insert(first_sid + i);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SID_SYMBOLS, SYSTEM_MAX_ID};

    fn shared(name: &str, symbols: &[&str]) -> Arc<SymbolTable> {
        Arc::new(SymbolTable::new_shared(name, 1, symbols.iter().copied()).unwrap())
    }

    #[test]
    fn find_prefers_own_symbols_over_imports() {
        let import = shared("a", &["dup"]);
        let mut table = SymbolTable::new_local_with_symbols(
            Some(system_symbol_table()),
            vec![import],
            vec![Some("dup".to_owned())],
        )
        .unwrap();
        assert_eq!(table.find_symbol_id("dup"), Some(SYSTEM_MAX_ID + 2));
        assert_eq!(table.intern("dup").unwrap().sid(), Some(SYSTEM_MAX_ID + 2));
    }

    #[test]
    fn find_walks_imports_in_declared_order() {
        let a = shared("a", &["x", "y"]);
        let b = shared("b", &["y", "z"]);
        let table = SymbolTable::new_local(Some(system_symbol_table()), vec![a, b]).unwrap();
        assert_eq!(table.find_symbol_id("y"), Some(SYSTEM_MAX_ID + 2));
        assert_eq!(table.find_symbol_id("z"), Some(SYSTEM_MAX_ID + 4));
        assert_eq!(table.find_symbol_id("symbols"), Some(SID_SYMBOLS));
        assert_eq!(table.find_known_symbol(SYSTEM_MAX_ID + 3), Some("y"));
    }

    #[test]
    fn duplicate_own_symbols_keep_lowest_sid() {
        let table = SymbolTable::new_shared("dups", 1, ["a", "b", "a"]).unwrap();
        assert_eq!(table.find_symbol_id("a"), Some(1));
        assert_eq!(table.find_known_symbol(3), Some("a"));
        assert_eq!(table.max_id(), 3);
    }

    #[test]
    fn make_read_only_is_idempotent() {
        let mut table = SymbolTable::local();
        table.make_read_only();
        table.make_read_only();
        assert!(table.is_read_only());
        assert!(table.is_local());
    }
}
