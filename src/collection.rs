//! The name of the collection that account documents are stored in.

use std::fmt::Display;

use crate::Error;

/// The name of a collection of account documents.
///
/// Each collection is backed by its own SQLite table, so the name is
/// restricted to ASCII letters, digits and underscores and must not start
/// with a digit. This makes it safe to splice into SQL statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection(String);

impl Collection {
    /// The collection used when none is configured.
    pub const DEFAULT_NAME: &'static str = "customers";

    /// Create a collection name from `name`.
    ///
    /// # Errors
    /// Returns [Error::InvalidCollectionName] if `name` is empty, starts with
    /// a digit or contains anything other than ASCII letters, digits and
    /// underscores.
    pub fn new(name: &str) -> Result<Self, Error> {
        let mut chars = name.chars();

        let starts_well = chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
        let rest_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if starts_well && rest_is_valid {
            Ok(Self(name.to_owned()))
        } else {
            Err(Error::InvalidCollectionName(name.to_owned()))
        }
    }

    /// The collection name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self(Self::DEFAULT_NAME.to_owned())
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
