use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::GenerateError;

/// Category name → background file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    entries: BTreeMap<String, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, category: impl Into<String>, file_name: impl Into<String>) {
        self.entries.insert(category.into(), file_name.into());
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries.get(category).map(String::as_str)
    }

    /// Resolves `category` to a path under `directory`.
    pub fn resolve(&self, directory: &Path, category: &str) -> Result<PathBuf, GenerateError> {
        self.get(category)
            .map(|file| directory.join(file))
            .ok_or_else(|| GenerateError::CategoryNotFound(category.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The stock backgrounds shipped in `images/`.
impl Default for CategoryMap {
    fn default() -> Self {
        let mut map = Self::new();
        for name in [
            "common", "english", "health", "life", "music", "program", "python", "voice",
        ] {
            map.insert(name, format!("{name}.png"));
        }
        map
    }
}

/// Parses `name = file` lines. Blank lines and `#` comments are skipped.
impl FromStr for CategoryMap {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = Self::new();
        for (idx, raw) in s.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let config_err = |message: &str| GenerateError::Config {
                line: idx + 1,
                message: message.to_string(),
            };
            let (name, file) = line
                .split_once('=')
                .ok_or_else(|| config_err("expected `name = file`"))?;
            let (name, file) = (name.trim(), file.trim());
            if name.is_empty() || file.is_empty() {
                return Err(config_err("category name and file must not be empty"));
            }
            map.insert(name, file);
        }
        Ok(map)
    }
}
