//! Compare a shipped opcode table against a fresh extraction.

use crate::extract::Extraction;
use crate::table::OpcodeTable;
use std::collections::BTreeMap;
use std::fmt;

/// A single disagreement between a table and the upstream source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Difference {
    /// The code exists in both, under different canonical mnemonics.
    Renamed {
        code: u32,
        shipped: String,
        upstream: String,
    },
    /// Upstream defines a code the table lacks.
    Missing { code: u32, upstream: String },
    /// The table has a code upstream no longer defines.
    Removed { code: u32, shipped: String },
}

impl Difference {
    pub fn code(&self) -> u32 {
        match self {
            Difference::Renamed { code, .. }
            | Difference::Missing { code, .. }
            | Difference::Removed { code, .. } => *code,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::Renamed {
                code,
                shipped,
                upstream,
            } => write!(f, "0x{:02x}: {} is {} upstream", code, shipped, upstream),
            Difference::Missing { code, upstream } => {
                write!(f, "0x{:02x}: {} is missing", code, upstream)
            }
            Difference::Removed { code, shipped } => {
                write!(f, "0x{:02x}: {} is no longer defined upstream", code, shipped)
            }
        }
    }
}

/// Differences by ascending code. Aliases are not compared; upstream
/// listings carry canonical names only.
pub fn compare(table: &OpcodeTable, extraction: &Extraction) -> Vec<Difference> {
    let upstream: BTreeMap<u32, &str> = extraction
        .entries()
        .map(|(mnemonic, code)| (code, mnemonic))
        .collect();

    let mut differences = Vec::new();
    for (&code, &mnemonic) in &upstream {
        match table.lookup_by_code(code) {
            Some(shipped) if shipped == mnemonic => {}
            Some(shipped) => differences.push(Difference::Renamed {
                code,
                shipped: shipped.to_string(),
                upstream: mnemonic.to_string(),
            }),
            None => differences.push(Difference::Missing {
                code,
                upstream: mnemonic.to_string(),
            }),
        }
    }
    for entry in table.canonical_entries() {
        if !upstream.contains_key(&entry.code) {
            differences.push(Difference::Removed {
                code: entry.code,
                shipped: entry.mnemonic.clone(),
            });
        }
    }

    differences.sort_by_key(Difference::code);
    differences
}
