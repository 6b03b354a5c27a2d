//! Ion 1.0 system symbols and well-known symbol IDs.

/// Ion 1.0 system symbol texts. Index 0 is `$0`, which never has text.
pub const SYSTEM_SYMBOLS: [&str; 10] = [
    "",
    "$ion",
    "$ion_1_0",
    "$ion_symbol_table",
    "name",
    "version",
    "imports",
    "symbols",
    "max_id",
    "$ion_shared_symbol_table",
];

pub const SID_ION: usize = 1;
pub const SID_ION_1_0: usize = 2;
pub const SID_ION_SYMBOL_TABLE: usize = 3;
pub const SID_NAME: usize = 4;
pub const SID_VERSION: usize = 5;
pub const SID_IMPORTS: usize = 6;
pub const SID_SYMBOLS: usize = 7;
pub const SID_MAX_ID: usize = 8;
pub const SID_ION_SHARED_SYMBOL_TABLE: usize = 9;

/// Highest SID defined by the Ion 1.0 system table.
pub const SYSTEM_MAX_ID: usize = 9;

/// Name of the system symbol table.
pub const ION: &str = "$ion";
/// Version identifier reported by every table built by this crate.
pub const ION_1_0: &str = "$ion_1_0";
pub const ION_SYMBOL_TABLE: &str = "$ion_symbol_table";
pub const ION_SHARED_SYMBOL_TABLE: &str = "$ion_shared_symbol_table";

pub const NAME: &str = "name";
pub const VERSION: &str = "version";
pub const IMPORTS: &str = "imports";
pub const SYMBOLS: &str = "symbols";
pub const MAX_ID: &str = "max_id";
