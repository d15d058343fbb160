//! # gpcrn Core Library
//!
//! The query resolution engine behind the `gpcrn` command-line tool: it maps
//! heterogeneous, case-insensitive identifiers for G-protein-coupled receptors
//! (UniProt accessions, gene names, protein symbols, PDB ids) onto a static
//! reference dataset and reports residue identities under standardized
//! cross-species numbering schemes (Ballesteros-Weinstein, Wootten, GPCRdb, ...).
//!
//! ## Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`data`]: The Reference Tables.** Immutable lookup tables distilled from
//!   a GPCRdb snapshot: protein records, the five identifier indices, per-protein
//!   numbering strings, the shared label string table, and the fixed scheme list.
//!   Loaded once, never mutated.
//!
//! - **[`query`]: The Resolution Engine.** Stateless algorithms over the tables:
//!   whitespace-tolerant case folding, identifier-class precedence resolution,
//!   residue location by sequence number or numbering label, and the
//!   `<target>:<numbering>` query orchestrator that turns one query line into an
//!   ordered sequence of result rows.

pub mod data;
pub mod query;
