//! Name bindings shared by both DataFrame variants.
//!
//! A [`ColumnIndex`] maps names to column positions in the owning frame. It
//! keeps two views over the same positions: the name-keyed view, holding every
//! bound name verbatim, and the attribute view, holding the first word of each
//! name when that word is a valid identifier (`"radius (arcsec)"` is reachable
//! as attribute `radius`). Both views are cleared and rebuilt together, so a
//! name that has been unbound can never be looked up through either of them.

use std::collections::BTreeMap;

use crate::error::{FrameError, Result};

#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    names: Option<Vec<String>>,
    keys: BTreeMap<String, usize>,
    attrs: BTreeMap<String, usize>,
}

impl ColumnIndex {
    /// The visible column-name list, as last set by `set_columns`.
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.keys.get(name).copied()
    }

    pub fn lookup_attr(&self, attr: &str) -> Option<usize> {
        self.attrs.get(attr).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains_key(name)
    }

    /// Every bound name, including alternates and aliases.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    pub fn attrs(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// Replace all bindings with `names`.
    pub(crate) fn set(&mut self, names: Vec<String>, n_cols: usize) {
        self.keys.clear();
        self.attrs.clear();
        self.bind(&names, n_cols);
        self.names = Some(names);
    }

    /// Add `names` on top of the existing bindings.
    pub(crate) fn set_alt(&mut self, names: &[String], n_cols: usize) {
        self.bind(names, n_cols);
    }

    pub(crate) fn alias(&mut self, old: &str, new: String) -> Result<()> {
        if self.keys.contains_key(&new) {
            return Err(FrameError::DuplicateName { name: new });
        }
        let position = self.lookup(old).ok_or_else(|| FrameError::NameNotFound {
            name: old.to_string(),
        })?;
        self.insert(new, position);
        Ok(())
    }

    pub(crate) fn rename(&mut self, old: &str, new: String, n_cols: usize) -> Result<()> {
        let Some(names) = self.names.as_ref() else {
            return Err(FrameError::NameNotFound {
                name: old.to_string(),
            });
        };
        let Some(slot) = names.iter().position(|name| name == old) else {
            return Err(FrameError::NameNotFound {
                name: old.to_string(),
            });
        };
        let mut renamed = names.clone();
        renamed[slot] = new;
        self.set(renamed, n_cols);
        Ok(())
    }

    /// Append one name to the visible list and rebind everything.
    pub(crate) fn push(&mut self, name: String, n_cols: usize) -> bool {
        let Some(names) = self.names.as_ref() else {
            return false;
        };
        let mut extended = names.clone();
        extended.push(name);
        self.set(extended, n_cols);
        true
    }

    fn bind(&mut self, names: &[String], n_cols: usize) {
        // names past the last column are ignored
        for (position, name) in names.iter().take(n_cols).enumerate() {
            self.insert(name.clone(), position);
        }
    }

    fn insert(&mut self, name: String, position: usize) {
        if let Some(attr) = attribute_name(&name) {
            self.attrs.insert(attr.to_string(), position);
        }
        self.keys.insert(name, position);
    }
}

/// The attribute-style alias of a column name: its first whitespace-separated
/// word, if that word is a valid identifier.
pub fn attribute_name(name: &str) -> Option<&str> {
    let word = name.split_whitespace().next()?;
    is_identifier(word).then_some(word)
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}
