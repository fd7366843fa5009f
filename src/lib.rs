//! tabgrep - filter rows of delimited tabular data (CSV/TSV) by field patterns
//!
//! This crate keeps or discards rows of delimited data based on whether a
//! designated key field matches a set of patterns: exact literals (optionally
//! case-folded) or regular expressions. Header rows pass through untouched,
//! and the key field may be named instead of numbered, resolved per input
//! stream against that stream's header.
//!
//! # Example
//!
//! ```
//! use tabgrep::{FieldSpec, Grep, GrepConfig};
//!
//! let config = GrepConfig {
//!     patterns: vec!["apple".to_string()],
//!     key: FieldSpec::Name("name".to_string()),
//!     ..GrepConfig::default()
//! };
//! let mut grep = Grep::new(config).unwrap();
//!
//! let input = b"id,name\n1,apple\n2,banana\n";
//! let mut output = Vec::new();
//! grep.run(vec![&input[..]], &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "id,name\n1,apple\n");
//! ```
//!
//! # Regex Matching Example
//!
//! ```
//! use tabgrep::{FieldSpec, Grep, GrepConfig};
//!
//! let config = GrepConfig {
//!     patterns: vec!["^ba".to_string()],
//!     use_regex: true,
//!     key: FieldSpec::Index(2),
//!     ..GrepConfig::default()
//! };
//! let mut grep = Grep::new(config).unwrap();
//!
//! let input = b"id,name\n1,apple\n2,banana\n";
//! let mut output = Vec::new();
//! grep.run(vec![&input[..]], &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "id,name\n2,banana\n");
//! ```
//!
//! # Inverted Case-Insensitive Example
//!
//! ```
//! use tabgrep::{FieldSpec, Grep, GrepConfig};
//!
//! let config = GrepConfig {
//!     patterns: vec!["Apple".to_string()],
//!     ignore_case: true,
//!     invert: true,
//!     key: FieldSpec::Name("name".to_string()),
//!     ..GrepConfig::default()
//! };
//! let mut grep = Grep::new(config).unwrap();
//!
//! let input = b"id,name\n1,apple\n2,banana\n3,Apple\n";
//! let mut output = Vec::new();
//! grep.run(vec![&input[..]], &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "id,name\n2,banana\n");
//! ```

pub mod error;
pub mod field;
pub mod grep;
pub mod pattern;

pub use error::{Error, Result};
pub use field::{FieldResolver, FieldSpec, ResolveState};
pub use grep::{Grep, GrepConfig};
pub use pattern::{read_pattern_source, PatternSet};
