use std::io::{Read, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::field::{FieldResolver, FieldSpec};
use crate::pattern::PatternSet;

/// Run configuration, as assembled by the caller.
///
/// `patterns` holds every pattern for the run; when an external pattern
/// source is in play the caller drains it first and appends the result
/// here. The input and output delimiters may differ, which converts
/// between formats on the fly.
#[derive(Debug, Clone)]
pub struct GrepConfig {
    pub patterns: Vec<String>,
    pub ignore_case: bool,
    pub use_regex: bool,
    pub invert: bool,
    pub key: FieldSpec,
    pub delimiter: u8,
    pub out_delimiter: u8,
    pub no_header_row: bool,
}

impl Default for GrepConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            ignore_case: false,
            use_regex: false,
            invert: false,
            key: FieldSpec::Index(1),
            delimiter: b',',
            out_delimiter: b',',
            no_header_row: false,
        }
    }
}

/// The match engine: compiled patterns plus per-stream key field binding
#[derive(Debug)]
pub struct Grep {
    patterns: PatternSet,
    resolver: FieldResolver,
    invert: bool,
    delimiter: u8,
    out_delimiter: u8,
    has_header: bool,
}

impl Grep {
    /// Validate a configuration and compile its patterns.
    ///
    /// Fails before any record is read: on an empty pattern list, on a
    /// zero key field index (indices are 1-based), on a pattern that does
    /// not compile in regex mode, and on a column-name key combined with
    /// `no_header_row` (the name could never resolve).
    pub fn new(config: GrepConfig) -> Result<Self> {
        if matches!(config.key, FieldSpec::Index(0)) {
            return Err(Error::config("key field index is 1-based, got 0"));
        }

        if config.no_header_row {
            if let FieldSpec::Name(name) = &config.key {
                return Err(Error::config(format!(
                    "key field '{}' is a column name, which needs a header row",
                    name
                )));
            }
        }

        let patterns = PatternSet::compile(&config.patterns, config.ignore_case, config.use_regex)?;
        debug!("{} patterns compiled", patterns.len());

        Ok(Self {
            patterns,
            resolver: FieldResolver::new(config.key),
            invert: config.invert,
            delimiter: config.delimiter,
            out_delimiter: config.out_delimiter,
            has_header: !config.no_header_row,
        })
    }

    /// Filter every input stream into `output`, in order.
    ///
    /// Each stream re-resolves the key field against its own first row, so
    /// inputs with different column layouts can share one run. Headers pass
    /// through unmodified, one per stream. Output is flushed once at the
    /// end.
    pub fn run<R: Read, W: Write>(&mut self, inputs: Vec<R>, output: &mut W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.out_delimiter)
            .from_writer(output);

        for input in inputs {
            self.resolver.reset();
            self.process_stream(input, &mut writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn process_stream<R: Read, W: Write>(
        &mut self,
        input: R,
        writer: &mut csv::Writer<W>,
    ) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_reader(input);

        let mut records = reader.records();

        if self.has_header {
            match records.next() {
                Some(header) => {
                    let header = header?;
                    self.resolver.resolve_header(&header);
                    writer.write_record(&header)?;
                }
                None => return Ok(()),
            }
        }

        // The width check runs against the first data record only
        let mut key_index = None;

        for record in records {
            let record = record?;
            let index = match key_index {
                Some(index) => index,
                None => {
                    let index = self.resolver.validate_width(&record)?;
                    key_index = Some(index);
                    index
                }
            };

            let value = record.get(index - 1).unwrap_or("");
            let hit = self.patterns.is_hit(value);
            if hit != self.invert {
                writer.write_record(&record)?;
            }
        }

        Ok(())
    }
}
