//! Snapshot of a table's own declared symbols.

use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use crate::symbol_token::SymbolId;

/// Own symbol names of a table as they were when the snapshot was taken.
///
/// Later interning on the source table is not reflected. The snapshot can be
/// iterated any number of times and cloned cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredSymbolNames {
    first_sid: SymbolId,
    names: Arc<[Option<String>]>,
}

impl DeclaredSymbolNames {
    pub(super) fn snapshot(first_sid: SymbolId, names: &[Option<String>]) -> Self {
        Self {
            first_sid,
            names: Arc::from(names.to_vec()),
        }
    }

    /// SID of the first entry.
    pub fn first_sid(&self) -> SymbolId {
        self.first_sid
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> DeclaredSymbolNamesIter<'_> {
        DeclaredSymbolNamesIter {
            inner: self.names.iter(),
        }
    }

    /// Entries paired with their SIDs.
    pub fn iter_with_sids(&self) -> impl Iterator<Item = (SymbolId, Option<&str>)> + '_ {
        (self.first_sid..).zip(self.iter())
    }
}

impl<'a> IntoIterator for &'a DeclaredSymbolNames {
    type Item = Option<&'a str>;
    type IntoIter = DeclaredSymbolNamesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct DeclaredSymbolNamesIter<'a> {
    inner: slice::Iter<'a, Option<String>>,
}

impl<'a> Iterator for DeclaredSymbolNamesIter<'a> {
    type Item = Option<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|name| name.as_deref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for DeclaredSymbolNamesIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|name| name.as_deref())
    }
}

impl ExactSizeIterator for DeclaredSymbolNamesIter<'_> {}

impl FusedIterator for DeclaredSymbolNamesIter<'_> {}
