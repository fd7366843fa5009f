use std::collections::HashSet;
use std::io::Read;

use regex::Regex;

use crate::error::{Error, Result};

/// Compiled query patterns with the matching mode fixed for the whole set
#[derive(Debug)]
pub enum PatternSet {
    /// Exact string equality against a key set
    Literal {
        patterns: HashSet<String>,
        fold_case: bool,
    },
    /// Union of compiled regular expressions
    Regex(Vec<Regex>),
}

impl PatternSet {
    /// Compile pattern strings into an immutable set.
    ///
    /// Literal mode stores each pattern as a lookup key, lowercased first
    /// when `ignore_case` is set. Regex mode compiles each pattern with
    /// `(?i)` prepended for `ignore_case`; the first pattern that fails to
    /// compile aborts the whole set. Duplicate patterns collapse silently
    /// in both modes.
    pub fn compile(patterns: &[String], ignore_case: bool, use_regex: bool) -> Result<Self> {
        if patterns.is_empty() {
            return Err(Error::config("no patterns supplied"));
        }

        if use_regex {
            let mut seen = HashSet::new();
            let mut regexes = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                if !seen.insert(pattern.as_str()) {
                    continue;
                }
                let source = if ignore_case {
                    format!("(?i){}", pattern)
                } else {
                    pattern.clone()
                };
                let re = Regex::new(&source).map_err(|e| Error::pattern(pattern, e))?;
                regexes.push(re);
            }
            Ok(Self::Regex(regexes))
        } else {
            let keys = patterns
                .iter()
                .map(|p| {
                    if ignore_case {
                        p.to_lowercase()
                    } else {
                        p.clone()
                    }
                })
                .collect();
            Ok(Self::Literal {
                patterns: keys,
                fold_case: ignore_case,
            })
        }
    }

    /// Test one field value against the set
    #[inline]
    pub fn is_hit(&self, value: &str) -> bool {
        match self {
            Self::Literal {
                patterns,
                fold_case,
            } => {
                if *fold_case {
                    patterns.contains(value.to_lowercase().as_str())
                } else {
                    patterns.contains(value)
                }
            }
            Self::Regex(regexes) => regexes.iter().any(|re| re.is_match(value)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Literal { patterns, .. } => patterns.len(),
            Self::Regex(regexes) => regexes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drain an external pattern source, one pattern per row.
///
/// The source may itself be delimited data; only the first column of each
/// row is taken. Rows of differing widths are accepted, so a plain
/// one-pattern-per-line file is the single-column case of the same format.
pub fn read_pattern_source<R: Read>(reader: R, delimiter: u8) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut patterns = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            patterns.push(first.to_string());
        }
    }
    Ok(patterns)
}
