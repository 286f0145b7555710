//! Prefix mappings: the flat `PREFIX:LABEL` text files that name card brands and issuers.
//!
//! A [`PrefixMapping`] keeps its entries in insertion order so that reverse
//! lookups (label to prefix) are stable. Loading is fail-fast: a single
//! malformed line rejects the whole source and no partial mapping is returned.
//!
//! License: MIT OR Apache-2.0

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::errors::{CardError, Result};

/// Separator between the two fields of a mapping line.
pub const FIELD_SEPARATOR: char = ':';

/// Field order of a mapping line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MappingLayout {
    /// `PREFIX:LABEL`, e.g. `4:VISA`.
    #[default]
    PrefixFirst,
    /// `LABEL:PREFIX`, e.g. `VISA:4`.
    LabelFirst,
}

/// An ordered collection of unique `(prefix, label)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMapping {
    entries: Vec<(String, String)>,
}

impl PrefixMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. An existing prefix keeps its position and takes the new label.
    pub fn insert(&mut self, prefix: impl Into<String>, label: impl Into<String>) {
        let prefix = prefix.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => {
                debug!("Prefix '{}' redefined: '{}' -> '{}'", prefix, entry.1, label);
                entry.1 = label;
            }
            None => self.entries.push((prefix, label)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(prefix, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, l)| (p.as_str(), l.as_str()))
    }

    /// Loads a mapping from a text file.
    pub fn load_from_file<P: AsRef<Path>>(path: P, layout: MappingLayout) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading prefix mapping from: {}", path.display());
        let file = File::open(path).map_err(|source| CardError::MappingIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mapping = Self::from_reader(BufReader::new(file), layout, &path.display().to_string())?;
        info!("Loaded {} prefixes from {}.", mapping.len(), path.display());
        Ok(mapping)
    }

    /// Parses mapping text held in memory. `source_name` is only used in error messages.
    pub fn parse_str(text: &str, layout: MappingLayout, source_name: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes(), layout, source_name)
    }

    /// Parses mapping lines from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, layout: MappingLayout, source_name: &str) -> Result<Self> {
        let mut mapping = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| CardError::MappingIo {
                path: source_name.into(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let (prefix, label) = parse_line(&line, layout).map_err(|reason| {
                CardError::InvalidFileFormat {
                    source_name: source_name.to_string(),
                    reason: format!("line {}: {}", index + 1, reason),
                }
            })?;
            mapping.insert(prefix, label);
        }
        debug!("Parsed {} entries from '{}'", mapping.len(), source_name);
        Ok(mapping)
    }
}

impl<P: Into<String>, L: Into<String>> FromIterator<(P, L)> for PrefixMapping {
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (prefix, label) in iter {
            mapping.insert(prefix, label);
        }
        mapping
    }
}

fn parse_line(line: &str, layout: MappingLayout) -> std::result::Result<(String, String), String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [first, second] = fields.as_slice() else {
        return Err(format!(
            "expected exactly one '{}' separator, found {}",
            FIELD_SEPARATOR,
            fields.len() - 1
        ));
    };
    let (prefix, label) = match layout {
        MappingLayout::PrefixFirst => (first.trim(), second.trim()),
        MappingLayout::LabelFirst => (second.trim(), first.trim()),
    };

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("prefix '{}' is not a digit string", prefix));
    }
    if label.is_empty() {
        return Err(format!("prefix '{}' has an empty label", prefix));
    }
    Ok((prefix.to_string(), label.to_string()))
}
