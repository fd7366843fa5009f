use csv::StringRecord;
use tracing::warn;

use crate::error::{Error, Result};

/// The key field a run filters on, as given by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// 1-based column index
    Index(usize),
    /// Column name, bound against each stream's header row
    Name(String),
}

impl FieldSpec {
    /// Parse the key field from its command-line form.
    ///
    /// A string of ASCII digits is a 1-based index; anything else is a
    /// column name. Exactly one field is accepted, so a comma-separated
    /// list is rejected.
    pub fn parse(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::config("empty key field"));
        }
        if key.contains(',') {
            return Err(Error::config(format!(
                "exactly one key field may be given, got '{}'",
                key
            )));
        }
        if key.bytes().all(|b| b.is_ascii_digit()) {
            let index: usize = key
                .parse()
                .map_err(|_| Error::config(format!("key field index '{}' out of range", key)))?;
            if index == 0 {
                return Err(Error::config("key field index is 1-based, got 0"));
            }
            Ok(Self::Index(index))
        } else {
            Ok(Self::Name(key.to_string()))
        }
    }
}

/// Resolution lifecycle of the key field within one input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveState {
    /// Waiting for the stream's header row
    Unresolved,
    /// Bound to a 1-based column index
    Resolved(usize),
    /// The key cannot address any column of this stream
    Invalid,
}

/// Per-stream binding of a `FieldSpec` to a concrete column index.
///
/// Index specs bind at stream start; name specs bind when the stream's
/// header row arrives. The binding is forgotten between streams, so each
/// input file resolves against its own header.
#[derive(Debug)]
pub struct FieldResolver {
    spec: FieldSpec,
    state: ResolveState,
}

impl FieldResolver {
    pub fn new(spec: FieldSpec) -> Self {
        let state = Self::initial_state(&spec);
        Self { spec, state }
    }

    /// Drop any binding from the previous stream
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.spec);
    }

    fn initial_state(spec: &FieldSpec) -> ResolveState {
        match spec {
            FieldSpec::Index(index) => ResolveState::Resolved(*index),
            FieldSpec::Name(_) => ResolveState::Unresolved,
        }
    }

    pub fn state(&self) -> ResolveState {
        self.state
    }

    /// Bind a name spec against a header row; index specs ignore it.
    ///
    /// With duplicate column names the first occurrence wins. An unknown
    /// name is not fatal here: it logs a warning and leaves the resolver
    /// `Invalid`, and the run only fails if a data record then arrives.
    pub fn resolve_header(&mut self, header: &StringRecord) {
        if let FieldSpec::Name(name) = &self.spec {
            self.state = match header.iter().position(|col| col == name.as_str()) {
                Some(position) => ResolveState::Resolved(position + 1),
                None => {
                    warn!("ignore unknown column name: {}", name);
                    ResolveState::Invalid
                }
            };
        }
    }

    /// Check the bound index against the first data record's width.
    ///
    /// Runs once per stream. An index past the end of the record is
    /// dropped with a warning; with no usable key field left the run
    /// cannot continue.
    pub fn validate_width(&mut self, record: &StringRecord) -> Result<usize> {
        if let ResolveState::Resolved(index) = self.state {
            if index > record.len() {
                warn!("ignore unmatched field: {}", index);
                self.state = ResolveState::Invalid;
            }
        }
        match self.state {
            ResolveState::Resolved(index) => Ok(index),
            _ => Err(Error::NoFieldsMatched),
        }
    }
}
