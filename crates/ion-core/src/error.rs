//! Error type shared by symbol tables and values.

use thiserror::Error;

/// Failures raised by this crate.
///
/// Lookup misses are not errors; they are reported as `None` by the
/// `find*` family of operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IonError {
    /// The operation is not allowed in the current state of the receiver
    /// (for example, interning into a read-only symbol table).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// An accessor was called on a null value.
    #[error("cannot access the value of a null")]
    NullValueAccess,
    /// A mutator was called on a read-only value.
    #[error("value is read-only")]
    ValueLocked,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No catalog table could satisfy an import that declares no `max_id`.
    #[error("unresolved import {name} version {version}")]
    UnresolvedImport { name: String, version: u32 },
    #[error("invalid catalog definition: {0}")]
    InvalidCatalog(String),
}

pub type IonResult<T> = Result<T, IonError>;
