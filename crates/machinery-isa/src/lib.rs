//! Opcode registries for virtual machine bytecode formats.
//!
//! This crate defines, validates, and queries the opcode tables of bytecode
//! instruction sets, and extracts such tables from an upstream VM's own
//! opcode definitions.
//!
//! # Registries
//!
//! An [`OpcodeTable`] maps mnemonics to codes and codes back to canonical
//! mnemonics. Aliases let a parameterized family member share its base
//! opcode's code:
//!
//! ```
//! use rhizome_machinery_isa::Architecture;
//!
//! let pyvm = Architecture::python_vm().unwrap();
//! assert_eq!(pyvm.lookup_by_name("SLICE_0"), Some(0x1e));
//! assert_eq!(pyvm.lookup_by_code(0x1e), Some("SLICE"));
//! ```
//!
//! # Extraction
//!
//! [`extract`] turns `opname(N) -> {atom,A};` clauses into a listing sorted
//! by code:
//!
//! ```
//! use rhizome_machinery_isa::{ExtractOptions, ListingFormat, extract};
//!
//! let source = "opname(2) -> {'func_info',3};\nopname(1) -> {'label',1};\n";
//! let extraction = extract(source.as_bytes(), &ExtractOptions::default()).unwrap();
//! assert_eq!(
//!     extraction.render(ListingFormat::Listing, false),
//!     "LABEL = 0x01 # 001\nFUNC_INFO = 0x02 # 002\n"
//! );
//! ```

pub mod arch;
pub mod extract;
pub mod listing;
pub mod table;
pub mod verify;

pub use arch::{ArchError, Architecture, BeamOpcode, PyOpcode};
pub use extract::{
    CollisionPolicy, ExtractError, ExtractOptions, Extraction, ExtractionRecord, LineClass,
    extract, extract_file,
};
pub use listing::{ListingError, ListingFormat};
pub use table::{CodeWidth, Entry, OpcodeTable, OpcodeTableBuilder, TableError};
pub use verify::{Difference, compare};
