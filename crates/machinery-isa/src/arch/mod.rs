//! Shipped instruction-set architectures.
//!
//! Each architecture module declares its opcodes once with
//! `define_opcodes!`, which produces a closed enum for typed matching and
//! the literal table behind the architecture's [`OpcodeTable`].
//!
//! Architectures are built on first use and live for the rest of the
//! process. A table that fails validation is never served; every request
//! for that architecture reports the same [`TableError`].

use crate::table::{CodeWidth, Entry, OpcodeTable, TableError};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, error};

/// Declare an architecture's opcodes.
///
/// ```ignore
/// define_opcodes! {
///     pub enum PyOpcode {
///         Slice("SLICE")     = 0x1e,
///         Slice0("SLICE_0")  = 0x1e => Slice,
///         Slice1("SLICE_1")  = 0x1f,
///     }
/// }
/// ```
///
/// `=> Canonical` marks an alias sharing the canonical variant's code. The
/// canonical variant must come first.
macro_rules! define_opcodes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $variant:ident ( $mnemonic:literal ) = $code:literal $( => $canonical:ident )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $variant, )*
        }

        impl $name {
            /// Every opcode in declaration order, aliases included.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )*];

            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $( Self::$variant => $mnemonic, )*
                }
            }

            pub const fn code(self) -> u8 {
                match self {
                    $( Self::$variant => $code, )*
                }
            }

            /// The variant code lookups answer with for this opcode's code.
            pub const fn canonical(self) -> Self {
                match self {
                    $( Self::$variant => {
                        let chain = [Self::$variant $(, Self::$canonical)?];
                        chain[chain.len() - 1]
                    } )*
                }
            }

            pub fn is_alias(self) -> bool {
                self.canonical() != self
            }

            pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
                match mnemonic {
                    $( $mnemonic => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Canonical opcode for `code`.
            pub fn from_code(code: u8) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|op| op.code() == code && !op.is_alias())
            }

            /// Build the validated table for these opcodes.
            pub fn table() -> Result<$crate::table::OpcodeTable, $crate::table::TableError> {
                Self::ALL
                    .iter()
                    .fold(
                        $crate::table::OpcodeTable::builder($crate::table::CodeWidth::BYTE),
                        |builder, op| {
                            let code = u32::from(op.code());
                            if op.is_alias() {
                                builder.alias(op.mnemonic(), code, op.canonical().mnemonic())
                            } else {
                                builder.entry(op.mnemonic(), code)
                            }
                        },
                    )
                    .build()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.mnemonic())
            }
        }

        impl From<$name> for u8 {
            fn from(op: $name) -> u8 {
                op.code()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(code: u8) -> Result<Self, u8> {
                Self::from_code(code).ok_or(code)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, String> {
                Self::from_mnemonic(s).ok_or_else(|| s.to_string())
            }
        }
    };
}

pub mod beam;
pub mod pyvm;

pub use beam::BeamOpcode;
pub use pyvm::PyOpcode;

/// Errors from the architecture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchError {
    #[error("unknown architecture: {0}")]
    Unknown(String),

    #[error("invalid opcode table for {label}: {source}")]
    InvalidTable {
        label: &'static str,
        #[source]
        source: TableError,
    },
}

/// A named instruction set and its opcode table.
#[derive(Debug)]
pub struct Architecture {
    label: &'static str,
    description: &'static str,
    table: OpcodeTable,
}

impl Architecture {
    pub fn new(label: &'static str, description: &'static str, table: OpcodeTable) -> Self {
        Self {
            label,
            description,
            table,
        }
    }

    /// Erlang virtual machine (BEAM), a register machine.
    pub fn beam() -> Result<&'static Architecture, ArchError> {
        served(&BEAM, "beam")
    }

    /// Python 2.6 virtual machine, a stack machine.
    pub fn python_vm() -> Result<&'static Architecture, ArchError> {
        served(&PYTHON_VM, "pyvm")
    }

    /// Unique label, e.g. "beam".
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn table(&self) -> &OpcodeTable {
        &self.table
    }

    pub fn width(&self) -> CodeWidth {
        self.table.width()
    }

    pub fn lookup_by_name(&self, mnemonic: &str) -> Option<u32> {
        self.table.lookup_by_name(mnemonic)
    }

    pub fn lookup_by_code(&self, code: u32) -> Option<&str> {
        self.table.lookup_by_code(code)
    }

    pub fn entries(&self) -> std::slice::Iter<'_, Entry> {
        self.table.entries()
    }
}

type Slot = LazyLock<Result<Architecture, TableError>>;

static BEAM: Slot = LazyLock::new(|| {
    assemble("beam", "Erlang virtual machine (BEAM)", BeamOpcode::table())
});

static PYTHON_VM: Slot = LazyLock::new(|| {
    assemble("pyvm", "Python 2.6 virtual machine", PyOpcode::table())
});

fn assemble(
    label: &'static str,
    description: &'static str,
    table: Result<OpcodeTable, TableError>,
) -> Result<Architecture, TableError> {
    match table {
        Ok(table) => {
            debug!("built {} opcode table with {} entries", label, table.len());
            Ok(Architecture::new(label, description, table))
        }
        Err(err) => {
            error!("rejected {} opcode table: {}", label, err);
            Err(err)
        }
    }
}

fn served(slot: &'static Slot, label: &'static str) -> Result<&'static Architecture, ArchError> {
    LazyLock::force(slot)
        .as_ref()
        .map_err(|source| ArchError::InvalidTable {
            label,
            source: source.clone(),
        })
}

/// Labels of all shipped architectures.
pub const LABELS: &[&str] = &["beam", "pyvm"];

/// Find a shipped architecture by label.
pub fn lookup(label: &str) -> Result<&'static Architecture, ArchError> {
    match label {
        "beam" => Architecture::beam(),
        "pyvm" => Architecture::python_vm(),
        other => Err(ArchError::Unknown(other.to_string())),
    }
}
