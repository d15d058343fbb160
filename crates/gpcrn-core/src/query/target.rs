use super::error::QueryError;
use crate::data::store::ReferenceStore;

/// Which identifier class matched a target token.
///
/// Downstream this selects the output column to highlight; a PDB match
/// highlights nothing because no column shows the PDB id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchClass {
    /// Empty target: wildcard over every protein in the store.
    All,
    /// Exact UniProt accession.
    Canonical,
    /// PDB structure id.
    Pdb,
    /// Gene name (possibly multi-valued).
    Gene,
    /// Protein symbol, bare or as a `SYMBOL_SPECIES` composite.
    Symbol,
}

/// An ordered set of canonical ids plus the class that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMatch {
    pub ids: Vec<String>,
    pub class: MatchClass,
}

/// Resolves a target token to canonical ids.
///
/// The token is upper-cased (reference identifiers are case-normalized), then
/// the identifier classes are tried in fixed precedence order and the first
/// class with any hit wins. A string colliding across classes (a gene name
/// that is also a valid symbol, say) therefore resolves via the earlier class
/// only.
pub fn resolve_targets(store: &ReferenceStore, target: &str) -> Result<TargetMatch, QueryError> {
    let token = target.to_ascii_uppercase();

    if token.is_empty() {
        return Ok(TargetMatch {
            ids: store.all_ids().map(str::to_string).collect(),
            class: MatchClass::All,
        });
    }
    if store.lookup_canonical(&token).is_some() {
        return Ok(TargetMatch { ids: vec![token], class: MatchClass::Canonical });
    }
    if let Some(id) = store.lookup_pdb(&token) {
        return Ok(TargetMatch { ids: vec![id.to_string()], class: MatchClass::Pdb });
    }
    let by_gene = store.lookup_gene(&token);
    if !by_gene.is_empty() {
        return Ok(TargetMatch { ids: by_gene.to_vec(), class: MatchClass::Gene });
    }
    if let Some(id) = store.lookup_symbol_species(&token) {
        return Ok(TargetMatch { ids: vec![id.to_string()], class: MatchClass::Symbol });
    }
    let by_symbol = store.lookup_symbol(&token);
    if !by_symbol.is_empty() {
        return Ok(TargetMatch { ids: by_symbol.to_vec(), class: MatchClass::Symbol });
    }

    Err(QueryError::UnknownTarget { target: target.to_string() })
}
