use std::collections::HashSet;

use crate::error::{Result, VotingError};

/// The editors offered on the ballot, in display order.
pub const EDITORS: [&str; 13] = [
    "vi", "vim", "nano", "emacs", "vscode", "sublime", "atom", "neovim", "ed", "sakura",
    "hidemaru", "emeditor", "other",
];

/// An ordered set of distinct option names, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(VotingError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(names.len());
        if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(VotingError::DuplicateOption(dup.clone()));
        }

        Ok(Self { names })
    }

    pub fn editors() -> Self {
        Self {
            names: EDITORS.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact, case-sensitive lookup.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
