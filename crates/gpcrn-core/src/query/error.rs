use thiserror::Error;

/// User-input errors produced by query resolution.
///
/// None of these are internal faults: each carries the offending literal and a
/// hint of the accepted grammar, and makes the current query contribute zero
/// rows. Whether processing continues with the next query is the caller's
/// policy, not the engine's.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid query '{query}'; {reason}")]
    InvalidQuery { query: String, reason: &'static str },

    #[error("unknown target '{target}'; use a uniprot id, gene name, protein symbol or pdb id for a GPCR")]
    UnknownTarget { target: String },

    #[error("invalid numbering '{numbering}' for scheme '{scheme}'")]
    InvalidNumbering { numbering: String, scheme: &'static str },
}

impl QueryError {
    pub(crate) fn missing_separator(query: &str) -> Self {
        QueryError::InvalidQuery {
            query: query.to_string(),
            reason: "the correct form is '<target>:<numbering>'",
        }
    }

    pub(crate) fn empty_query(query: &str) -> Self {
        QueryError::InvalidQuery {
            query: query.to_string(),
            reason: "at least a target or a numbering is required",
        }
    }
}
