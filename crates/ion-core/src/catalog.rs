//! Shared symbol table catalogs and import resolution.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{IonError, IonResult};
use crate::symbol_table::{system_symbol_table, SymbolTable};
use crate::symbol_token::SymbolId;

/// Source of shared symbol tables, keyed by name and version.
pub trait Catalog {
    /// The highest available version of `name`.
    fn get_table(&self, name: &str) -> Option<Arc<SymbolTable>>;

    /// Exactly `name` at `version`.
    fn get_table_version(&self, name: &str, version: u32) -> Option<Arc<SymbolTable>>;
}

/// An import declared by a local symbol table header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDescriptor {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_id: Option<SymbolId>,
}

impl ImportDescriptor {
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            max_id: None,
        }
    }

    pub fn with_max_id(mut self, max_id: SymbolId) -> Self {
        self.max_id = Some(max_id);
        self
    }
}

fn default_version() -> u32 {
    1
}

/// Shape of one entry in a JSON catalog document.
#[derive(Debug, Deserialize)]
struct SharedTableDef {
    name: String,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    symbols: Vec<Option<String>>,
}

/// In-memory catalog.
#[derive(Debug, Default, Clone)]
pub struct SimpleCatalog {
    tables: HashMap<String, BTreeMap<u32, Arc<SymbolTable>>>,
}

impl SimpleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads shared tables from a JSON array of
    /// `{"name": ..., "version": ..., "symbols": [...]}` objects. `null`
    /// entries in `symbols` are undefined slots.
    pub fn from_json_str(json: &str) -> IonResult<Self> {
        let defs: Vec<SharedTableDef> =
            serde_json::from_str(json).map_err(|e| IonError::InvalidCatalog(e.to_string()))?;
        let mut catalog = Self::new();
        for def in defs {
            let table = SymbolTable::new_shared_with_gaps(def.name, def.version, def.symbols)?;
            catalog.put_table(Arc::new(table))?;
        }
        Ok(catalog)
    }

    /// Registers a shared table, replacing any table with the same name and
    /// version. Local and substitute tables are rejected.
    pub fn put_table(&mut self, table: Arc<SymbolTable>) -> IonResult<()> {
        if table.is_local() || table.is_substitute() {
            return Err(IonError::InvalidArgument(format!(
                "cannot register a {:?} table in a catalog",
                table.kind()
            )));
        }
        let name = table.name().unwrap_or_default().to_owned();
        let version = table.version();
        debug!(%name, version, max_id = table.max_id(), "catalog table registered");
        self.tables.entry(name).or_default().insert(version, table);
        Ok(())
    }

    pub fn remove_table(&mut self, name: &str, version: u32) -> Option<Arc<SymbolTable>> {
        let versions = self.tables.get_mut(name)?;
        let removed = versions.remove(&version);
        if versions.is_empty() {
            self.tables.remove(name);
        }
        removed
    }

    /// Number of registered tables, counting every version.
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Catalog for SimpleCatalog {
    fn get_table(&self, name: &str) -> Option<Arc<SymbolTable>> {
        self.tables
            .get(name)
            .and_then(|versions| versions.values().next_back())
            .cloned()
    }

    fn get_table_version(&self, name: &str, version: u32) -> Option<Arc<SymbolTable>> {
        self.tables
            .get(name)
            .and_then(|versions| versions.get(&version))
            .cloned()
    }
}

/// Resolves one import against `catalog`.
///
/// * an exact name/version match whose `max_id` agrees (or is not
///   declared) is used as-is;
/// * an exact match with a different `max_id` yields a substitute cut or
///   padded to the declared `max_id`;
/// * otherwise, when `max_id` is declared, a substitute is derived from the
///   highest available version, or built with no text at all;
/// * otherwise the import cannot be resolved.
///
/// Versions below 1 are treated as 1.
pub fn resolve_import(
    catalog: &dyn Catalog,
    import: &ImportDescriptor,
) -> IonResult<Arc<SymbolTable>> {
    let version = import.version.max(1);
    if let Some(table) = catalog.get_table_version(&import.name, version) {
        return match import.max_id {
            Some(max_id) if max_id != table.max_id() => {
                debug!(
                    name = %import.name,
                    version,
                    max_id,
                    catalog_max_id = table.max_id(),
                    "import max_id differs from catalog table"
                );
                let substitute =
                    SymbolTable::new_substitute(import.name.as_str(), version, max_id, Some(&*table))?;
                Ok(Arc::new(substitute))
            }
            _ => Ok(table),
        };
    }
    let Some(max_id) = import.max_id else {
        return Err(IonError::UnresolvedImport {
            name: import.name.clone(),
            version,
        });
    };
    let best = catalog.get_table(&import.name);
    warn!(
        name = %import.name,
        version,
        max_id,
        best_version = best.as_ref().map(|t| t.version()),
        "no exact catalog match for import, using substitute table"
    );
    let substitute = SymbolTable::new_substitute(import.name.as_str(), version, max_id, best.as_deref())?;
    Ok(Arc::new(substitute))
}

/// Resolves every import, preserving order.
pub fn resolve_imports(
    catalog: &dyn Catalog,
    imports: &[ImportDescriptor],
) -> IonResult<Vec<Arc<SymbolTable>>> {
    imports
        .iter()
        .map(|import| resolve_import(catalog, import))
        .collect()
}

impl SymbolTable {
    /// An empty local table on the system table, importing `imports`
    /// resolved through `catalog`.
    pub fn new_local_from_catalog(
        catalog: &dyn Catalog,
        imports: &[ImportDescriptor],
    ) -> IonResult<Self> {
        Self::new_local(Some(system_symbol_table()), resolve_imports(catalog, imports)?)
    }
}
