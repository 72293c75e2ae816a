//! In-memory contact storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::directory::error::DirectoryError;
use crate::directory::normalize::{
    clean_phone, collapse_whitespace, normalize_name, valid_name, valid_phone,
};

/// A stored entry: normalized display name plus digits-only phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// In-memory directory mapping display names to phone digits.
///
/// Keys are unique. register/find go through case normalization, so they are
/// effectively case-insensitive; delete matches the exact stored case. No
/// internal synchronization; callers serialize access.
#[derive(Debug, Default)]
pub struct Directory {
    entries: BTreeMap<String, String>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalize, and insert a new contact.
    ///
    /// Fails with [`DirectoryError::InvalidName`] / [`DirectoryError::InvalidPhone`]
    /// on bad input and [`DirectoryError::Duplicate`] when the normalized name
    /// is already registered.
    pub fn register(&mut self, name: &str, phone: &str) -> Result<Contact, DirectoryError> {
        let name = name.trim();
        let phone = phone.trim();

        if !valid_name(name) {
            return Err(DirectoryError::InvalidName);
        }
        if !valid_phone(phone) {
            return Err(DirectoryError::InvalidPhone);
        }

        let normalized = normalize_name(name);
        if self.entries.contains_key(&normalized) {
            return Err(DirectoryError::Duplicate(normalized));
        }

        let cleaned = clean_phone(phone);
        self.entries.insert(normalized.clone(), cleaned.clone());
        Ok(Contact {
            name: normalized,
            phone: cleaned,
        })
    }

    /// Look up a contact by name, case-insensitively (the input is normalized
    /// before the lookup). Empty or whitespace-only input yields `None`.
    pub fn find(&self, name: &str) -> Option<Contact> {
        if name.trim().is_empty() {
            return None;
        }
        let normalized = normalize_name(name);
        let phone = self.entries.get(&normalized)?;
        Some(Contact {
            name: normalized,
            phone: phone.clone(),
        })
    }

    /// All contacts in lexicographic key order.
    pub fn list(&self) -> Vec<Contact> {
        self.entries
            .iter()
            .map(|(name, phone)| Contact {
                name: name.clone(),
                phone: phone.clone(),
            })
            .collect()
    }

    /// Remove a contact by exact (case-preserved) name, collapsing only
    /// extra whitespace. Unlike `find`, `delete("juan pérez")` will NOT match
    /// a stored "Juan Pérez"; this asymmetry is inherited behavior and kept.
    pub fn delete(&mut self, name: &str) -> Result<Contact, DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::InvalidName);
        }
        let key = collapse_whitespace(name);
        match self.entries.remove(&key) {
            Some(phone) => Ok(Contact { name: key, phone }),
            None => Err(DirectoryError::NotFound(key)),
        }
    }

    /// Number of stored contacts.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
