//! Opcode tables.
//!
//! An [`OpcodeTable`] maps mnemonics to numeric codes and back. Tables are
//! assembled with an [`OpcodeTableBuilder`] and validated once in
//! [`OpcodeTableBuilder::build`]; a built table never changes.
//!
//! Several mnemonics may share a code when they are declared aliases of one
//! canonical mnemonic (e.g. `SLICE_0` of `SLICE`). Name lookups accept
//! either form, code lookups always answer with the canonical mnemonic.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use thiserror::Error;

/// Errors that reject a table at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("empty mnemonic for code {code:#04x}")]
    EmptyMnemonic { code: u32 },

    #[error("mnemonic {0:?} is not an uppercase identifier")]
    InvalidMnemonic(String),

    #[error("mnemonic {0} is registered more than once")]
    DuplicateMnemonic(String),

    #[error("code {code:#x} of {mnemonic} does not fit in {bits} bits")]
    CodeOutOfRange { mnemonic: String, code: u32, bits: u8 },

    #[error("code {code:#04x} is claimed by both {existing} and {mnemonic}")]
    CodeCollision {
        code: u32,
        existing: String,
        mnemonic: String,
    },

    #[error("alias {alias} refers to unknown mnemonic {canonical}")]
    UnknownCanonical { alias: String, canonical: String },

    #[error("alias {alias} has code {code:#04x} but {canonical} has {expected:#04x}")]
    AliasCodeMismatch {
        alias: String,
        canonical: String,
        code: u32,
        expected: u32,
    },

    #[error("alias {alias} refers to {canonical}, which is itself an alias")]
    AliasOfAlias { alias: String, canonical: String },
}

/// Number of bits available to an opcode in the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeWidth(u8);

impl CodeWidth {
    /// Single-byte opcodes (`0..=255`).
    pub const BYTE: Self = Self(8);

    /// Create a width of `bits` bits. Codes are `u32`, so only `1..=32`
    /// is accepted.
    pub const fn new(bits: u8) -> Option<Self> {
        if bits == 0 || bits > 32 {
            None
        } else {
            Some(Self(bits))
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Largest code representable in this width.
    pub const fn max_code(self) -> u32 {
        if self.0 >= 32 {
            u32::MAX
        } else {
            (1u32 << self.0) - 1
        }
    }

    pub const fn contains(self, code: u32) -> bool {
        code <= self.max_code()
    }
}

impl Default for CodeWidth {
    fn default() -> Self {
        Self::BYTE
    }
}

/// A single mnemonic/code pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Uppercase instruction name (e.g. "CALL")
    pub mnemonic: String,
    /// Numeric encoding in the instruction stream
    pub code: u32,
    /// Canonical mnemonic when this entry is an alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,
}

impl Entry {
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }

    /// The mnemonic code lookups answer with for this entry's code.
    pub fn canonical(&self) -> &str {
        self.alias_of.as_deref().unwrap_or(&self.mnemonic)
    }
}

/// Validated, immutable opcode table.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    width: CodeWidth,
    /// Sorted by code; equal codes keep declaration order.
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<u32, usize>,
}

impl OpcodeTable {
    /// Start assembling a table for opcodes of the given width.
    pub fn builder(width: CodeWidth) -> OpcodeTableBuilder {
        OpcodeTableBuilder::new(width)
    }

    pub fn width(&self) -> CodeWidth {
        self.width
    }

    /// Code of a canonical or alias mnemonic. Matching is case-sensitive.
    pub fn lookup_by_name(&self, mnemonic: &str) -> Option<u32> {
        self.get(mnemonic).map(|entry| entry.code)
    }

    /// Canonical mnemonic for `code`, or `None` for unused codes.
    pub fn lookup_by_code(&self, code: u32) -> Option<&str> {
        self.by_code
            .get(&code)
            .map(|&idx| self.entries[idx].mnemonic.as_str())
    }

    /// Full entry for a canonical or alias mnemonic.
    pub fn get(&self, mnemonic: &str) -> Option<&Entry> {
        self.by_name.get(mnemonic).map(|&idx| &self.entries[idx])
    }

    /// Resolve an alias to its canonical mnemonic. Canonical mnemonics map to
    /// themselves.
    pub fn canonical_of(&self, mnemonic: &str) -> Option<&str> {
        self.get(mnemonic).map(Entry::canonical)
    }

    pub fn contains_code(&self, code: u32) -> bool {
        self.by_code.contains_key(&code)
    }

    /// All entries, aliases included, by ascending code. Entries sharing a
    /// code appear in declaration order, canonical first.
    pub fn entries(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Canonical entries only, by ascending code.
    pub fn canonical_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(|entry| !entry.is_alias())
    }

    /// Number of mnemonics, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a OpcodeTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[derive(Debug, Clone)]
struct Declaration {
    mnemonic: String,
    code: u32,
    alias_of: Option<String>,
}

/// Collects declarations and validates them into an [`OpcodeTable`].
#[derive(Debug, Clone)]
pub struct OpcodeTableBuilder {
    width: CodeWidth,
    declarations: Vec<Declaration>,
}

impl OpcodeTableBuilder {
    pub fn new(width: CodeWidth) -> Self {
        Self {
            width,
            declarations: Vec::new(),
        }
    }

    /// Declare a canonical mnemonic.
    pub fn entry(mut self, mnemonic: impl Into<String>, code: u32) -> Self {
        self.declarations.push(Declaration {
            mnemonic: mnemonic.into(),
            code,
            alias_of: None,
        });
        self
    }

    /// Declare `mnemonic` as an alias of `canonical`, sharing `code`.
    ///
    /// The canonical mnemonic must be declared before its aliases.
    pub fn alias(
        mut self,
        mnemonic: impl Into<String>,
        code: u32,
        canonical: impl Into<String>,
    ) -> Self {
        self.declarations.push(Declaration {
            mnemonic: mnemonic.into(),
            code,
            alias_of: Some(canonical.into()),
        });
        self
    }

    /// Validate every declaration and freeze the table.
    pub fn build(self) -> Result<OpcodeTable, TableError> {
        let width = self.width;
        let mut entries: Vec<Entry> = Vec::with_capacity(self.declarations.len());
        let mut names: HashMap<String, usize> = HashMap::new();
        let mut codes: HashMap<u32, usize> = HashMap::new();

        for decl in self.declarations {
            validate_mnemonic(&decl.mnemonic, decl.code)?;
            if !width.contains(decl.code) {
                return Err(TableError::CodeOutOfRange {
                    mnemonic: decl.mnemonic,
                    code: decl.code,
                    bits: width.bits(),
                });
            }
            if names.contains_key(&decl.mnemonic) {
                return Err(TableError::DuplicateMnemonic(decl.mnemonic));
            }

            match &decl.alias_of {
                Some(canonical) => {
                    let Some(&target) = names.get(canonical) else {
                        return Err(TableError::UnknownCanonical {
                            alias: decl.mnemonic,
                            canonical: canonical.clone(),
                        });
                    };
                    let target = &entries[target];
                    if target.is_alias() {
                        return Err(TableError::AliasOfAlias {
                            alias: decl.mnemonic,
                            canonical: canonical.clone(),
                        });
                    }
                    if target.code != decl.code {
                        return Err(TableError::AliasCodeMismatch {
                            alias: decl.mnemonic,
                            canonical: canonical.clone(),
                            code: decl.code,
                            expected: target.code,
                        });
                    }
                }
                None => match codes.entry(decl.code) {
                    MapEntry::Occupied(existing) => {
                        return Err(TableError::CodeCollision {
                            code: decl.code,
                            existing: entries[*existing.get()].mnemonic.clone(),
                            mnemonic: decl.mnemonic,
                        });
                    }
                    MapEntry::Vacant(slot) => {
                        slot.insert(entries.len());
                    }
                },
            }

            names.insert(decl.mnemonic.clone(), entries.len());
            entries.push(Entry {
                mnemonic: decl.mnemonic,
                code: decl.code,
                alias_of: decl.alias_of,
            });
        }

        // Stable: aliases stay behind the canonical entry they follow.
        entries.sort_by_key(|entry| entry.code);

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_name.insert(entry.mnemonic.clone(), idx);
            if !entry.is_alias() {
                by_code.insert(entry.code, idx);
            }
        }

        Ok(OpcodeTable {
            width,
            entries,
            by_name,
            by_code,
        })
    }
}

/// Mnemonics are uppercase identifiers: `[A-Z][A-Z0-9_]*`.
fn validate_mnemonic(mnemonic: &str, code: u32) -> Result<(), TableError> {
    let mut chars = mnemonic.chars();
    let Some(first) = chars.next() else {
        return Err(TableError::EmptyMnemonic { code });
    };
    let valid = first.is_ascii_uppercase()
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TableError::InvalidMnemonic(mnemonic.to_string()))
    }
}
