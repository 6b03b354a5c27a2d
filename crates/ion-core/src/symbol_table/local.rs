//! Local symbol tables: construction, interning and inline serialization.

use std::sync::Arc;

use tracing::{debug, trace};

use super::{index_symbols, system_symbol_table, SymbolTable, SymbolTableKind};
use crate::constants::{IMPORTS, ION_SYMBOL_TABLE, MAX_ID, NAME, SID_ION_SYMBOL_TABLE, SYMBOLS, VERSION};
use crate::error::{IonError, IonResult};
use crate::symbol_token::SymbolToken;
use crate::types::IonType;
use crate::writer::IonWriter;

impl SymbolTable {
    /// An empty local table on top of the Ion 1.0 system table.
    pub fn local() -> Self {
        Self::build_local(Some(system_symbol_table()), Vec::new(), Vec::new())
    }

    /// An empty local table importing `imports` after `system`.
    ///
    /// `system` must be a system table and every import must be a shared,
    /// non-system table.
    pub fn new_local(
        system: Option<Arc<SymbolTable>>,
        imports: Vec<Arc<SymbolTable>>,
    ) -> IonResult<Self> {
        Self::new_local_with_symbols(system, imports, Vec::new())
    }

    /// A local table whose own symbols are already declared, as when a
    /// decoder reads a `$ion_symbol_table` header. `None` entries reserve a
    /// SID without text.
    pub fn new_local_with_symbols(
        system: Option<Arc<SymbolTable>>,
        imports: Vec<Arc<SymbolTable>>,
        symbols: Vec<Option<String>>,
    ) -> IonResult<Self> {
        if let Some(system) = &system {
            if !system.is_system() {
                return Err(IonError::InvalidArgument(
                    "a local table's system table must be a system table".to_owned(),
                ));
            }
        }
        if let Some(import) = imports.iter().find(|t| t.is_local() || t.is_system()) {
            return Err(IonError::InvalidArgument(format!(
                "cannot import a {:?} table into a local table",
                import.kind()
            )));
        }
        Ok(Self::build_local(system, imports, symbols))
    }

    fn build_local(
        system: Option<Arc<SymbolTable>>,
        imports: Vec<Arc<SymbolTable>>,
        symbols: Vec<Option<String>>,
    ) -> Self {
        let imported_max_id = system.as_ref().map_or(0, |s| s.max_id())
            + imports.iter().map(|t| t.max_id()).sum::<usize>();
        let ids = index_symbols(&symbols, imported_max_id + 1);
        let table = Self {
            kind: SymbolTableKind::Local,
            name: None,
            version: 0,
            system,
            imports,
            imported_max_id,
            symbols,
            ids,
            read_only: false,
        };
        debug!(
            imports = table.imports.len(),
            imported_max_id,
            max_id = table.max_id(),
            "local symbol table created"
        );
        table.debug_check_invariants();
        table
    }

    /// Finds `text` or assigns it the next SID.
    ///
    /// Existing symbols are returned even when the table is read-only; a new
    /// symbol on a read-only table is an [`IonError::InvalidOperation`] and
    /// leaves the table unchanged.
    pub fn intern(&mut self, text: &str) -> IonResult<SymbolToken> {
        if let Some(sid) = self.find_symbol_id(text) {
            return Ok(SymbolToken::new(text, sid));
        }
        if self.read_only {
            return Err(IonError::InvalidOperation(format!(
                "cannot intern {text:?} into a read-only symbol table"
            )));
        }
        // max_id() is never below imported_max_id.
        let sid = self.max_id() + 1;
        self.symbols.push(Some(text.to_owned()));
        self.ids.insert(text.to_owned(), sid);
        trace!(sid, text, "interned symbol");
        Ok(SymbolToken::new(text, sid))
    }

    /// Writes this table as a `$ion_symbol_table::{...}` header.
    ///
    /// Imports are written by reference (`name`, `version`, `max_id`), never
    /// inlined. Only local tables can be written; shared tables are expected
    /// to be resolvable from a catalog.
    pub fn write_to<W: IonWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        if !self.is_local() {
            return Err(IonError::InvalidOperation(format!(
                "a {:?} symbol table cannot be written inline",
                self.kind
            ))
            .into());
        }
        writer.set_type_annotations(&[SymbolToken::new(ION_SYMBOL_TABLE, SID_ION_SYMBOL_TABLE)])?;
        writer.step_in(IonType::Struct)?;
        if !self.imports.is_empty() {
            writer.set_field_name(IMPORTS)?;
            writer.step_in(IonType::List)?;
            for import in &self.imports {
                writer.step_in(IonType::Struct)?;
                writer.set_field_name(NAME)?;
                writer.write_string(import.name().unwrap_or_default())?;
                writer.set_field_name(VERSION)?;
                writer.write_int(i64::from(import.version()))?;
                writer.set_field_name(MAX_ID)?;
                writer.write_int(import.max_id() as i64)?;
                writer.step_out()?;
            }
            writer.step_out()?;
        }
        if !self.symbols.is_empty() {
            writer.set_field_name(SYMBOLS)?;
            writer.step_in(IonType::List)?;
            for symbol in &self.symbols {
                match symbol {
                    Some(text) => writer.write_string(text)?,
                    None => writer.write_null(IonType::String)?,
                }
            }
            writer.step_out()?;
        }
        writer.step_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYSTEM_MAX_ID;

    #[test]
    fn intern_assigns_after_system_symbols() {
        let mut table = SymbolTable::local();
        assert_eq!(table.imported_max_id(), SYSTEM_MAX_ID);
        let foo = table.intern("foo").unwrap();
        assert_eq!(foo, SymbolToken::new("foo", SYSTEM_MAX_ID + 1));
        assert_eq!(table.intern("bar").unwrap().sid(), Some(SYSTEM_MAX_ID + 2));
        assert_eq!(table.intern("foo").unwrap(), foo);
        assert_eq!(table.max_id(), SYSTEM_MAX_ID + 2);
    }

    #[test]
    fn intern_system_symbol_returns_system_sid() {
        let mut table = SymbolTable::local();
        assert_eq!(table.intern("name").unwrap().sid(), Some(4));
        assert_eq!(table.max_id(), SYSTEM_MAX_ID);
    }

    #[test]
    fn empty_string_is_a_symbol() {
        let mut table = SymbolTable::local();
        let empty = table.intern("").unwrap();
        assert_eq!(empty.text(), Some(""));
        assert_eq!(empty.sid(), Some(SYSTEM_MAX_ID + 1));
        assert_eq!(table.find_known_symbol(SYSTEM_MAX_ID + 1), Some(""));
    }

    #[test]
    fn read_only_rejects_new_symbols_only() {
        let mut table = SymbolTable::local();
        table.intern("kept").unwrap();
        table.make_read_only();
        assert!(table.intern("kept").is_ok());
        assert!(table.intern("version").is_ok());
        assert!(matches!(table.intern("new"), Err(IonError::InvalidOperation(_))));
        assert_eq!(table.max_id(), SYSTEM_MAX_ID + 1);
    }

    #[test]
    fn local_tables_cannot_be_imported() {
        let other = Arc::new(SymbolTable::local());
        let err = SymbolTable::new_local(Some(system_symbol_table()), vec![other]).unwrap_err();
        assert!(matches!(err, IonError::InvalidArgument(_)));
    }

    #[test]
    fn system_slot_requires_system_table() {
        let shared = Arc::new(SymbolTable::new_shared("s", 1, ["a"]).unwrap());
        assert!(SymbolTable::new_local(Some(shared), vec![]).is_err());
    }

    #[test]
    fn local_without_system_table() {
        let mut table = SymbolTable::new_local(None, vec![]).unwrap();
        assert_eq!(table.imported_max_id(), 0);
        assert!(table.system_table().is_none());
        assert_eq!(table.intern("a").unwrap().sid(), Some(1));
        assert_eq!(table.find_symbol_id("$ion"), None);
    }
}
