//! Splits raw command arguments into a preamble and prefix→value pairs.
//!
//! ```text
//! "n/Alice Bob  p/9123"  →  preamble ""
//!                           n/ → ["Alice Bob"]
//!                           p/ → ["9123"]
//! ```
//!
//! A prefix only counts at the start of the input or right after whitespace,
//! so `alice@x.n/y` stays inside whatever value it belongs to.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{QueryError, Result};
use crate::field::FieldTag;

/// Values found for each prefix, plus the text preceding the first prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<FieldTag, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the trimmed text before the first recognised prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns every value given for `tag`, in input order.
    pub fn all_values(&self, tag: FieldTag) -> &[String] {
        self.values.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `tag` appeared at least once.
    pub fn contains(&self, tag: FieldTag) -> bool {
        self.values.contains_key(&tag)
    }

    /// Returns `true` if any of `tags` appeared.
    pub fn any_present(&self, tags: &[FieldTag]) -> bool {
        tags.iter().any(|tag| self.contains(*tag))
    }

    /// Records a value for `tag`.
    pub fn put(&mut self, tag: FieldTag, value: impl Into<String>) {
        self.values.entry(tag).or_default().push(value.into());
    }
}

/// Tokenizes `args`, recognising only the prefixes of `tags`.
pub fn tokenize(args: &str, tags: &[FieldTag]) -> Result<ArgumentMultimap> {
    let mut multimap = ArgumentMultimap::default();
    if tags.is_empty() {
        multimap.preamble = args.trim().to_string();
        return Ok(multimap);
    }

    let alternatives: Vec<String> = tags.iter().map(|t| regex::escape(t.prefix())).collect();
    let pattern = format!(r"(?:^|\s)({})", alternatives.join("|"));
    let regex = Regex::new(&pattern)
        .map_err(|e| QueryError::invalid(format!("bad prefix pattern: {}", e)))?;

    // (tag, start of prefix, start of value)
    let mut marks: Vec<(FieldTag, usize, usize)> = Vec::new();
    for caps in regex.captures_iter(args) {
        let Some(prefix) = caps.get(1) else { continue };
        if let Some(tag) = FieldTag::from_prefix(prefix.as_str()) {
            marks.push((tag, prefix.start(), prefix.end()));
        }
    }

    let preamble_end = marks.first().map(|m| m.1).unwrap_or(args.len());
    multimap.preamble = args[..preamble_end].trim().to_string();

    for (i, (tag, _, value_start)) in marks.iter().enumerate() {
        let value_end = marks.get(i + 1).map(|m| m.1).unwrap_or(args.len());
        multimap.put(*tag, args[*value_start..value_end].trim());
    }

    Ok(multimap)
}
