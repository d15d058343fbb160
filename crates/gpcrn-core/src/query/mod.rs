//! The query resolution engine: case folding, identifier resolution, residue
//! location, and the `<target>:<numbering>` orchestrator.

pub mod engine;
pub mod error;
pub mod locate;
pub mod matcher;
pub mod target;

pub use engine::{Column, QueryEngine, Row};
pub use error::QueryError;
pub use target::{MatchClass, TargetMatch, resolve_targets};
