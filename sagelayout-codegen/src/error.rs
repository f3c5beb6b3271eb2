//! Error types for layout generation.

use thiserror::Error;

/// Error type for layout generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] sagelayout_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported occurrence count on a member.
    ///
    /// The only representable multiplicities are "exactly one" and
    /// "unbounded"; any other `maxOccurs` marker aborts generation for
    /// the whole document.
    #[error(
        "unsupported cardinality on member '{member}' of type '{member_type}' in record '{record}'"
    )]
    UnsupportedCardinality {
        /// Owning record type name.
        record: String,
        /// Declared member type name.
        member_type: String,
        /// Member name.
        member: String,
    },
}

impl CodegenError {
    /// Creates an unsupported cardinality error.
    pub fn unsupported_cardinality(
        record: impl Into<String>,
        member_type: impl Into<String>,
        member: impl Into<String>,
    ) -> Self {
        Self::UnsupportedCardinality {
            record: record.into(),
            member_type: member_type.into(),
            member: member.into(),
        }
    }
}
