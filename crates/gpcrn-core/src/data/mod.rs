//! Static reference tables: protein records, identifier indices, numbering
//! strings, and the fixed scheme list. Everything here is read-only after load.

pub mod loader;
pub mod residues;
pub mod scheme;
pub mod store;

pub use scheme::{DEFAULT_SCHEME_KEYWORD, NumberingScheme, SCHEMES, resolve_scheme};
pub use store::{ProteinRecord, ReferenceStore, ResidueNumbering};
