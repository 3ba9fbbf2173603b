//! The textual opcode listing format.
//!
//! A listing has one opcode per line:
//!
//! ```text
//! LABEL = 0x01 # 001
//! FUNC_INFO = 0x02 # 002
//! ```
//!
//! The code is written twice, in hex and zero-padded decimal, so a listing
//! can be diffed against documentation using either base. Listings are valid
//! TOML, which is how [`OpcodeTable::from_listing`] reads them back.

use crate::table::{CodeWidth, OpcodeTable, OpcodeTableBuilder, TableError};
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use thiserror::Error;

/// Errors that can occur while loading a listing.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("listing is not valid: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("value of {0} is not an integer")]
    NotAnInteger(String),

    #[error("code {code} of {mnemonic} is not a valid opcode")]
    InvalidCode { mnemonic: String, code: i64 },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Output notation for rendered tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingFormat {
    /// `MNEMONIC = 0xHH # DDD`
    #[default]
    Listing,
    /// `Variant("MNEMONIC") = 0xHH,` for a `define_opcodes!` block
    Rust,
}

/// Format one listing line. `pad` left-aligns the mnemonic to that many
/// columns; `0` disables alignment.
pub fn format_line(mnemonic: &str, code: u32, pad: usize) -> String {
    format!("{:<pad$} = 0x{:02x} # {:03}", mnemonic, code, code, pad = pad)
}

/// Format one `define_opcodes!` line.
pub fn format_rust_line(mnemonic: &str, code: u32, pad: usize) -> String {
    let declaration = format!("{}(\"{}\")", variant_name(mnemonic), mnemonic);
    format!("{:<pad$} = 0x{:02x},", declaration, code, pad = pad)
}

/// Render `(mnemonic, code)` pairs in the requested notation, one per line.
pub fn render<'a, I>(entries: I, format: ListingFormat, align: bool) -> String
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let entries: Vec<_> = entries.into_iter().collect();
    let pad = if align {
        entries
            .iter()
            .map(|(mnemonic, _)| match format {
                ListingFormat::Listing => mnemonic.len(),
                ListingFormat::Rust => variant_name(mnemonic).len() + mnemonic.len() + 4,
            })
            .max()
            .unwrap_or(0)
    } else {
        0
    };

    let mut output = String::new();
    for (mnemonic, code) in entries {
        let line = match format {
            ListingFormat::Listing => format_line(mnemonic, code, pad),
            ListingFormat::Rust => format_rust_line(mnemonic, code, pad),
        };
        // Writing to a String cannot fail.
        let _ = writeln!(output, "{}", line);
    }
    output
}

/// Convert an uppercase mnemonic into a Rust variant name
/// (e.g. "FUNC_INFO" -> "FuncInfo", "SLICE_0" -> "Slice0").
pub fn variant_name(mnemonic: &str) -> String {
    let mut name = String::with_capacity(mnemonic.len());
    for word in mnemonic.split('_').filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

impl OpcodeTable {
    /// Load a table from listing text.
    ///
    /// Entries keep their listing order. A mnemonic `<BASE>_0` that shares
    /// its code with an earlier `<BASE>` is registered as an alias of it;
    /// any other shared code is rejected as a collision.
    ///
    /// A mnemonic listed twice is a duplicate key to the listing parser, so
    /// it fails as [`ListingError::Parse`] before the table is validated,
    /// never as [`TableError::DuplicateMnemonic`].
    pub fn from_listing(text: &str, width: CodeWidth) -> Result<Self, ListingError> {
        let document: toml::Table = text.parse()?;
        let mut builder = OpcodeTableBuilder::new(width);
        let mut seen: HashMap<&str, u32> = HashMap::with_capacity(document.len());

        for (mnemonic, value) in &document {
            let raw = value
                .as_integer()
                .ok_or_else(|| ListingError::NotAnInteger(mnemonic.clone()))?;
            let code = u32::try_from(raw).map_err(|_| ListingError::InvalidCode {
                mnemonic: mnemonic.clone(),
                code: raw,
            })?;

            let family_base = mnemonic
                .strip_suffix("_0")
                .filter(|base| seen.get(base) == Some(&code));
            builder = match family_base {
                Some(base) => builder.alias(mnemonic.as_str(), code, base),
                None => builder.entry(mnemonic.as_str(), code),
            };
            seen.insert(mnemonic.as_str(), code);
        }

        Ok(builder.build()?)
    }

    /// Render the table, aliases included, as listing text.
    pub fn to_listing(&self, align: bool) -> String {
        render(
            self.entries().map(|entry| (entry.mnemonic.as_str(), entry.code)),
            ListingFormat::Listing,
            align,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("LABEL", 1, 0), "LABEL = 0x01 # 001");
        assert_eq!(format_line("FUNC_INFO", 2, 0), "FUNC_INFO = 0x02 # 002");
        assert_eq!(format_line("BS_PUT_UTF32", 148, 0), "BS_PUT_UTF32 = 0x94 # 148");
        assert_eq!(format_line("CALL", 4, 8), "CALL     = 0x04 # 004");
    }

    #[test]
    fn test_format_rust_line() {
        assert_eq!(format_rust_line("FUNC_INFO", 2, 0), "FuncInfo(\"FUNC_INFO\") = 0x02,");
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name("LABEL"), "Label");
        assert_eq!(variant_name("FUNC_INFO"), "FuncInfo");
        assert_eq!(variant_name("SLICE_0"), "Slice0");
        assert_eq!(variant_name("BIF0"), "Bif0");
        assert_eq!(variant_name("M_PLUS"), "MPlus");
        assert_eq!(variant_name("0DAY"), "_0day");
    }

    #[test]
    fn test_render_aligned() {
        let text = render([("CALL", 4), ("FUNC_INFO", 2)], ListingFormat::Listing, true);
        assert_eq!(text, "CALL      = 0x04 # 004\nFUNC_INFO = 0x02 # 002\n");
    }

    #[test]
    fn test_from_listing_family_alias() {
        let text = "\
SLICE = 0x1e # 030
SLICE_0 = 0x1e # 030
SLICE_1 = 0x1f # 031
";
        let table = OpcodeTable::from_listing(text, CodeWidth::BYTE).unwrap();
        assert_eq!(table.lookup_by_code(0x1e), Some("SLICE"));
        assert_eq!(table.lookup_by_name("SLICE_0"), Some(0x1e));
        assert!(table.get("SLICE_0").unwrap().is_alias());
        assert!(!table.get("SLICE_1").unwrap().is_alias());
    }

    #[test]
    fn test_from_listing_rejects_unrelated_shared_code() {
        let text = "CALL = 0x04 # 004\nJUMP = 0x04 # 004\n";
        let err = OpcodeTable::from_listing(text, CodeWidth::BYTE).unwrap_err();
        assert!(matches!(
            err,
            ListingError::Table(TableError::CodeCollision { code: 4, .. })
        ));
    }

    #[test]
    fn test_from_listing_repeated_mnemonic() {
        let text = "CALL = 0x04 # 004\nCALL = 0x05 # 005\n";
        let err = OpcodeTable::from_listing(text, CodeWidth::BYTE).unwrap_err();
        assert!(matches!(err, ListingError::Parse(_)));
    }

    #[test]
    fn test_from_listing_bad_values() {
        let err = OpcodeTable::from_listing("CALL = \"four\"", CodeWidth::BYTE).unwrap_err();
        assert!(matches!(err, ListingError::NotAnInteger(name) if name == "CALL"));

        let err = OpcodeTable::from_listing("CALL = -4", CodeWidth::BYTE).unwrap_err();
        assert!(matches!(err, ListingError::InvalidCode { code: -4, .. }));

        let err = OpcodeTable::from_listing("CALL = = 4", CodeWidth::BYTE).unwrap_err();
        assert!(matches!(err, ListingError::Parse(_)));
    }

    #[test]
    fn test_listing_reloads() {
        let table = OpcodeTable::builder(CodeWidth::BYTE)
            .entry("STORE_SLICE", 0x28)
            .alias("STORE_SLICE_0", 0x28, "STORE_SLICE")
            .entry("STORE_SLICE_1", 0x29)
            .build()
            .unwrap();

        let reloaded = OpcodeTable::from_listing(&table.to_listing(true), CodeWidth::BYTE).unwrap();
        let original: Vec<_> = table.entries().cloned().collect();
        let loaded: Vec<_> = reloaded.entries().cloned().collect();
        assert_eq!(original, loaded);
    }
}
