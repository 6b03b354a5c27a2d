//! Shared and substitute symbol tables.

use std::collections::HashMap;

use tracing::debug;

use super::{index_symbols, SymbolTable, SymbolTableKind};
use crate::error::{IonError, IonResult};
use crate::symbol_token::SymbolId;

impl SymbolTable {
    /// A shared table whose symbols all have text.
    pub fn new_shared<I>(name: impl Into<String>, version: u32, symbols: I) -> IonResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let symbols = symbols.into_iter().map(|s| Some(s.into())).collect();
        Self::new_shared_with_gaps(name, version, symbols)
    }

    /// A shared table whose symbol list may contain undefined slots.
    pub fn new_shared_with_gaps(
        name: impl Into<String>,
        version: u32,
        symbols: Vec<Option<String>>,
    ) -> IonResult<Self> {
        let name = validate_name_version(name.into(), version)?;
        debug!(%name, version, max_id = symbols.len(), "shared symbol table created");
        Ok(Self::build_shared(SymbolTableKind::Shared, name, version, symbols))
    }

    /// A stand-in for an import `name`/`version` that could not be matched
    /// exactly.
    ///
    /// The first `max_id` symbols of `original` (usually another version of
    /// the same table) are kept; slots beyond it, or every slot when there is
    /// no original, are undefined.
    pub fn new_substitute(
        name: impl Into<String>,
        version: u32,
        max_id: SymbolId,
        original: Option<&SymbolTable>,
    ) -> IonResult<Self> {
        let name = validate_name_version(name.into(), version)?;
        if original.is_some_and(|t| t.is_local()) {
            return Err(IonError::InvalidArgument(
                "a substitute table cannot be derived from a local table".to_owned(),
            ));
        }
        let symbols = (1..=max_id)
            .map(|sid| original.and_then(|t| t.find_known_symbol(sid)).map(str::to_owned))
            .collect();
        debug!(
            %name,
            version,
            max_id,
            original_version = original.map(|t| t.version()),
            "substitute symbol table created"
        );
        Ok(Self::build_shared(SymbolTableKind::Substitute, name, version, symbols))
    }

    pub(super) fn build_shared(
        kind: SymbolTableKind,
        name: String,
        version: u32,
        symbols: Vec<Option<String>>,
    ) -> Self {
        let ids: HashMap<String, SymbolId> = index_symbols(&symbols, 1);
        let table = Self {
            kind,
            name: Some(name),
            version,
            system: None,
            imports: Vec::new(),
            imported_max_id: 0,
            symbols,
            ids,
            read_only: true,
        };
        table.debug_check_invariants();
        table
    }
}

fn validate_name_version(name: String, version: u32) -> IonResult<String> {
    if name.is_empty() {
        return Err(IonError::InvalidArgument(
            "shared symbol table name must not be empty".to_owned(),
        ));
    }
    if version == 0 {
        return Err(IonError::InvalidArgument(format!(
            "shared symbol table {name} must have a positive version"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_table_is_born_read_only() {
        let mut table = SymbolTable::new_shared("greetings", 2, ["hello", "hi"]).unwrap();
        assert!(table.is_shared());
        assert!(table.is_read_only());
        assert!(!table.is_local() && !table.is_system() && !table.is_substitute());
        assert_eq!(table.name(), Some("greetings"));
        assert_eq!(table.version(), 2);
        assert_eq!(table.imported_max_id(), 0);
        assert!(table.imported_tables().is_empty());
        assert!(table.system_table().is_none());
        assert_eq!(table.intern("hi").unwrap().sid(), Some(2));
        assert!(matches!(table.intern("hey"), Err(IonError::InvalidOperation(_))));
    }

    #[test]
    fn shared_table_rejects_bad_identity() {
        assert!(SymbolTable::new_shared("", 1, ["a"]).is_err());
        assert!(SymbolTable::new_shared("t", 0, ["a"]).is_err());
    }

    #[test]
    fn substitute_truncates_original() {
        let original = SymbolTable::new_shared("t", 1, ["a", "b", "c"]).unwrap();
        let sub = SymbolTable::new_substitute("t", 2, 2, Some(&original)).unwrap();
        assert!(sub.is_substitute() && sub.is_shared() && !sub.is_system());
        assert_eq!(sub.max_id(), 2);
        assert_eq!(sub.find_known_symbol(2), Some("b"));
        assert_eq!(sub.find_known_symbol(3), None);
        assert_eq!(sub.find_symbol_id("c"), None);
    }

    #[test]
    fn substitute_pads_original() {
        let original = SymbolTable::new_shared("t", 1, ["a"]).unwrap();
        let sub = SymbolTable::new_substitute("t", 3, 4, Some(&original)).unwrap();
        assert_eq!(sub.max_id(), 4);
        assert_eq!(sub.find_known_symbol(1), Some("a"));
        assert_eq!(sub.find_known_symbol(4), None);
    }

    #[test]
    fn substitute_without_original_has_no_text() {
        let sub = SymbolTable::new_substitute("missing", 1, 5, None).unwrap();
        assert_eq!(sub.max_id(), 5);
        assert!((0..=6).all(|sid| sub.find_known_symbol(sid).is_none()));
        assert_eq!(sub.declared_symbol_names().iter().filter(|n| n.is_none()).count(), 5);
    }
}
