//! Opcode table extraction from `beam_opcodes.erl`.
//!
//! The Erlang compiler defines its opcode numbers as clauses of `opname/1`:
//!
//! ```text
//! opname(1) -> {label,1};
//! opname(2) -> {func_info,3};
//! ```
//!
//! Extraction runs in two stages. [`classify_line`] labels every line as an
//! entry or ignored, and [`Accumulator`] folds the entries into a map keyed
//! by code. Lines that do not match the clause shape exactly are ignored
//! without complaint; only their count is reported.

use crate::listing::{self, ListingFormat};
use crate::table::{CodeWidth, OpcodeTable, TableError};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default name of the upstream opcode source.
pub const DEFAULT_SOURCE: &str = "beam_opcodes.erl";

/// Errors that can occur during extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read source: {0}")]
    Read(#[from] io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "line {line}: code {code} redefined as {mnemonic} (previously {previous} on line {previous_line})"
    )]
    Collision {
        code: u32,
        mnemonic: String,
        line: usize,
        previous: String,
        previous_line: usize,
    },
}

/// What to do when two lines define the same code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Later lines replace earlier ones; each replacement is recorded.
    #[default]
    Overwrite,
    /// The first redefinition aborts extraction.
    Reject,
}

/// Extraction settings.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub policy: CollisionPolicy,
}

/// One matched source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// 1-based line number in the source
    pub line_number: usize,
    /// The matched line, without its terminator
    pub raw_match: String,
    pub code: u32,
    /// Upper-cased atom
    pub mnemonic: String,
}

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Entry(ExtractionRecord),
    Ignored,
}

/// A code defined by more than one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub code: u32,
    pub previous: ExtractionRecord,
    pub replacement: ExtractionRecord,
}

/// Classify one line of `beam_opcodes.erl`.
///
/// A line is an entry iff it is exactly `opname(N) -> {atom,A};` where `N`
/// and `A` are decimal numbers and `atom` is a word optionally quoted with
/// `'`. Numbers too large for a `u32` code are ignored, with a debug log.
pub fn classify_line(line_number: usize, line: &str) -> LineClass {
    let Some((number, atom)) = parse_clause(line) else {
        return LineClass::Ignored;
    };
    let Ok(code) = number.parse::<u32>() else {
        debug!(
            "line {}: opname({}) does not fit a u32 code, ignored",
            line_number, number
        );
        return LineClass::Ignored;
    };

    LineClass::Entry(ExtractionRecord {
        line_number,
        raw_match: line.to_string(),
        code,
        mnemonic: atom.to_ascii_uppercase(),
    })
}

fn parse_clause(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("opname(")?;
    let (number, rest) = split_digits(rest)?;
    let rest = rest.strip_prefix(") -> {")?;

    let rest = rest.strip_prefix('\'').unwrap_or(rest);
    let word_len = rest
        .find(|c: char| !is_word_char(c))
        .unwrap_or(rest.len());
    if word_len == 0 {
        return None;
    }
    let (atom, rest) = rest.split_at(word_len);
    let rest = rest.strip_prefix('\'').unwrap_or(rest);

    let rest = rest.strip_prefix(',')?;
    let (_arity, rest) = split_digits(rest)?;
    if rest != "};" {
        return None;
    }

    Some((number, atom))
}

/// Split a non-empty run of ASCII digits off the front of `s`.
fn split_digits(s: &str) -> Option<(&str, &str)> {
    let len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (len > 0).then(|| s.split_at(len))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Folds classified lines into a code-ordered map.
#[derive(Debug, Default)]
pub struct Accumulator {
    policy: CollisionPolicy,
    by_code: BTreeMap<u32, ExtractionRecord>,
    matched_lines: usize,
    ignored_lines: usize,
    collisions: Vec<Collision>,
}

impl Accumulator {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Fold one classified line.
    pub fn push(&mut self, class: LineClass) -> Result<(), ExtractError> {
        let record = match class {
            LineClass::Entry(record) => record,
            LineClass::Ignored => {
                self.ignored_lines += 1;
                return Ok(());
            }
        };
        self.matched_lines += 1;

        let Some(previous) = self.by_code.get(&record.code) else {
            self.by_code.insert(record.code, record);
            return Ok(());
        };

        if self.policy == CollisionPolicy::Reject {
            return Err(ExtractError::Collision {
                code: record.code,
                mnemonic: record.mnemonic,
                line: record.line_number,
                previous: previous.mnemonic.clone(),
                previous_line: previous.line_number,
            });
        }

        warn!(
            "line {}: code {} redefined as {} (previously {} on line {})",
            record.line_number, record.code, record.mnemonic, previous.mnemonic, previous.line_number
        );
        let code = record.code;
        if let Some(previous) = self.by_code.insert(code, record.clone()) {
            self.collisions.push(Collision {
                code,
                previous,
                replacement: record,
            });
        }
        Ok(())
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            records: self.by_code.into_values().collect(),
            matched_lines: self.matched_lines,
            ignored_lines: self.ignored_lines,
            collisions: self.collisions,
        }
    }
}

/// Result of one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    records: Vec<ExtractionRecord>,
    matched_lines: usize,
    ignored_lines: usize,
    collisions: Vec<Collision>,
}

impl Extraction {
    /// Surviving records by ascending code.
    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    /// `(mnemonic, code)` pairs by ascending code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.records
            .iter()
            .map(|record| (record.mnemonic.as_str(), record.code))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lines that matched the clause shape, including overwritten ones.
    pub fn matched_lines(&self) -> usize {
        self.matched_lines
    }

    /// Lines that did not match and were skipped.
    pub fn ignored_lines(&self) -> usize {
        self.ignored_lines
    }

    /// Codes redefined by a later line, in source order.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Render the extracted table.
    pub fn render(&self, format: ListingFormat, align: bool) -> String {
        listing::render(self.entries(), format, align)
    }

    /// Validate the extraction as an opcode table.
    pub fn to_table(&self, width: CodeWidth) -> Result<OpcodeTable, TableError> {
        self.entries()
            .fold(OpcodeTable::builder(width), |builder, (mnemonic, code)| {
                builder.entry(mnemonic, code)
            })
            .build()
    }
}

/// Extract opcodes from a line-oriented reader.
pub fn extract<R: BufRead>(reader: R, options: &ExtractOptions) -> Result<Extraction, ExtractError> {
    let mut accumulator = Accumulator::new(options.policy);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        accumulator.push(classify_line(idx + 1, line.trim_end_matches('\r')))?;
    }

    let extraction = accumulator.finish();
    debug!(
        "matched {} lines, ignored {}",
        extraction.matched_lines, extraction.ignored_lines
    );
    Ok(extraction)
}

/// Extract opcodes from the upstream source file at `path`.
pub fn extract_file<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extraction = extract(BufReader::new(file), options).map_err(|err| match err {
        ExtractError::Read(source) => ExtractError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(
        "extracted {} opcodes from {} ({} lines skipped, {} redefinitions)",
        extraction.len(),
        path.display(),
        extraction.ignored_lines(),
        extraction.collisions().len()
    );
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn run(source: &str, policy: CollisionPolicy) -> Result<Extraction, ExtractError> {
        extract(source.as_bytes(), &ExtractOptions { policy })
    }

    #[test]
    fn test_classify_entry() {
        let class = classify_line(7, "opname(2) -> {func_info,3};");
        assert_eq!(
            class,
            LineClass::Entry(ExtractionRecord {
                line_number: 7,
                raw_match: "opname(2) -> {func_info,3};".into(),
                code: 2,
                mnemonic: "FUNC_INFO".into(),
            })
        );
    }

    #[test]
    fn test_classify_quoted_atom() {
        let LineClass::Entry(record) = classify_line(1, "opname(1) -> {'label',1};") else {
            panic!("quoted atom should match");
        };
        assert_eq!(record.mnemonic, "LABEL");
        assert_eq!(record.code, 1);
    }

    #[test]
    fn test_classify_ignores_near_misses() {
        for line in [
            "",
            "%% opname(1) -> {label,1};",
            "opname(1) -> {label,1}.",
            "opname(1) -> {label,1}; ",
            " opname(1) -> {label,1};",
            "opname(x) -> {label,1};",
            "opname(1) -> {,1};",
            "opname(1) -> {label};",
            "opname(1) -> {label,n};",
            "opname(1)->{label,1};",
            "opname(99999999999) -> {huge,1};",
            "-module(beam_opcodes).",
        ] {
            assert_eq!(classify_line(1, line), LineClass::Ignored, "{:?}", line);
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_oversized_code_is_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let class = tracing::subscriber::with_default(subscriber, || {
            classify_line(12, "opname(4294967296) -> {huge,1};")
        });
        assert_eq!(class, LineClass::Ignored);

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(
            output.contains("line 12: opname(4294967296) does not fit a u32 code"),
            "{}",
            output
        );
    }

    #[test]
    fn test_sorted_output() {
        let source = "opname(2) -> {'func_info',3};\nopname(1) -> {'label',1};\n";
        let extraction = run(source, CollisionPolicy::Overwrite).unwrap();
        assert_eq!(
            extraction.render(ListingFormat::Listing, false),
            "LABEL = 0x01 # 001\nFUNC_INFO = 0x02 # 002\n"
        );
    }

    #[test]
    fn test_ignored_lines_counted() {
        let source = "%% header\nopname(1) -> {label,1};\n\n-export([opname/1]).\r\n";
        let extraction = run(source, CollisionPolicy::Overwrite).unwrap();
        assert_eq!(extraction.matched_lines(), 1);
        assert_eq!(extraction.ignored_lines(), 3);
    }

    #[test]
    fn test_crlf_lines_match() {
        let source = "opname(1) -> {label,1};\r\nopname(2) -> {func_info,3};\r\n";
        let extraction = run(source, CollisionPolicy::Overwrite).unwrap();
        assert_eq!(extraction.len(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let source = "opname(5) -> {old_name,1};\nopname(5) -> {new_name,1};\n";
        let extraction = run(source, CollisionPolicy::Overwrite).unwrap();
        assert_eq!(extraction.entries().collect::<Vec<_>>(), vec![("NEW_NAME", 5)]);
        assert_eq!(extraction.matched_lines(), 2);

        let collisions = extraction.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].code, 5);
        assert_eq!(collisions[0].previous.mnemonic, "OLD_NAME");
        assert_eq!(collisions[0].replacement.line_number, 2);
    }

    #[test]
    fn test_reject_policy() {
        let source = "opname(5) -> {old_name,1};\nopname(5) -> {new_name,1};\n";
        let err = run(source, CollisionPolicy::Reject).unwrap_err();
        match err {
            ExtractError::Collision {
                code,
                mnemonic,
                line,
                previous,
                previous_line,
            } => {
                assert_eq!(code, 5);
                assert_eq!(mnemonic, "NEW_NAME");
                assert_eq!(line, 2);
                assert_eq!(previous, "OLD_NAME");
                assert_eq!(previous_line, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_to_table() {
        let source = "opname(1) -> {label,1};\nopname(4) -> {call,2};\n";
        let table = run(source, CollisionPolicy::Overwrite)
            .unwrap()
            .to_table(CodeWidth::BYTE)
            .unwrap();
        assert_eq!(table.lookup_by_code(4), Some("CALL"));
        assert_eq!(table.lookup_by_code(2), None);
    }

    #[test]
    fn test_to_table_rejects_wide_codes() {
        let source = "opname(256) -> {wide,1};\n";
        let err = run(source, CollisionPolicy::Overwrite)
            .unwrap()
            .to_table(CodeWidth::BYTE)
            .unwrap_err();
        assert!(matches!(err, TableError::CodeOutOfRange { code: 256, .. }));
    }

    #[test]
    fn test_rust_format() {
        let source = "opname(1) -> {label,1};\nopname(2) -> {func_info,3};\n";
        let extraction = run(source, CollisionPolicy::Overwrite).unwrap();
        assert_eq!(
            extraction.render(ListingFormat::Rust, false),
            "Label(\"LABEL\") = 0x01,\nFuncInfo(\"FUNC_INFO\") = 0x02,\n"
        );
    }
}
