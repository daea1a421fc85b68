use std::fmt;

use crate::arm::handler_name::handler_name;
use crate::arm::legend::classify;
use crate::family::{OpcodeIndex, TableFamily};

/// Token standing for "no handler" in the generated tables.
pub const UNIMPLEMENTED_TOKEN: &str = "NULL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerReference {
    /// Symbol of a handler defined by the emulator core.
    Named(String),

    Unimplemented,
}

impl HandlerReference {
    #[must_use]
    pub const fn is_implemented(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl fmt::Display for HandlerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Unimplemented => f.write_str(UNIMPLEMENTED_TOKEN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Absolute index the entry was generated from, kept for auditing.
    pub annotation: u16,
    pub handler: HandlerReference,
}

/// Dense table with one entry per slot of a family, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    family: TableFamily,
    entries: Vec<TableEntry>,
}

impl DispatchTable {
    /// Classifies every slot of `family`. Families without classification
    /// logic yield a placeholder table.
    #[must_use]
    pub fn build(family: TableFamily) -> Self {
        if family.is_placeholder() {
            return Self::placeholder(family);
        }

        let table = Self::from_fn(family, |index| {
            classify(index).map_or(HandlerReference::Unimplemented, |fields| {
                HandlerReference::Named(handler_name(&fields))
            })
        });

        tracing::debug!(
            "built {family} table: {} entries, {} implemented, {} unimplemented",
            table.len(),
            table.implemented_count(),
            table.unimplemented_count()
        );

        table
    }

    /// Table of `family` where every entry is unimplemented.
    #[must_use]
    pub fn placeholder(family: TableFamily) -> Self {
        let table = Self::from_fn(family, |_| HandlerReference::Unimplemented);
        tracing::debug!("built {family} placeholder: {} entries", table.len());

        table
    }

    fn from_fn<F>(family: TableFamily, mut resolve: F) -> Self
    where
        F: FnMut(OpcodeIndex) -> HandlerReference,
    {
        let entries = family
            .indices()
            .map(|index| TableEntry {
                annotation: index.absolute(),
                handler: resolve(index),
            })
            .collect();

        Self { family, entries }
    }

    #[must_use]
    pub const fn family(&self) -> TableFamily {
        self.family
    }

    #[must_use]
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: OpcodeIndex) -> Option<&HandlerReference> {
        if index.family() != self.family {
            return None;
        }

        self.entries
            .get(usize::from(index.offset()))
            .map(|entry| &entry.handler)
    }

    /// Handler an ARM instruction dispatches to, when the table covers it.
    #[must_use]
    pub fn lookup_arm(&self, op_code: u32) -> Option<&HandlerReference> {
        self.get(self.family.locate_arm(op_code)?)
    }

    /// Handler a Thumb instruction dispatches to, when the table covers it.
    #[must_use]
    pub fn lookup_thumb(&self, op_code: u16) -> Option<&HandlerReference> {
        self.get(self.family.locate_thumb(op_code)?)
    }

    #[must_use]
    pub fn implemented_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.handler.is_implemented())
            .count()
    }

    #[must_use]
    pub fn unimplemented_count(&self) -> usize {
        self.len() - self.implemented_count()
    }
}
