//! Error types, split into two disjoint classes.
//!
//! - [`FormatError`]: the record's data does not satisfy its variant's
//!   schema. Recoverable at the caller's discretion (e.g. skip the record,
//!   or abort the file read).
//! - [`ContractError`]: the caller misused the API (wrong record wired to a
//!   variant, accessor called under the wrong discriminator). Indicates a
//!   bug at the call site, not bad input data.

/// Data-validity failure raised by `validate`.
///
/// Each variant distinguishes a failure mode callers may react to
/// differently: wrong shape (count), wrong content (token or range), or
/// wrong format (unparseable number). The `record` field always carries the
/// offending record's textual form so the failure can be located in the
/// source file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The value count is outside the variant's accepted range.
    #[error("{record}: expected {expected} value(s), found {found}")]
    ValueCount {
        record: String,
        expected: String,
        found: usize,
    },
    /// The values must form pairs but the count is odd.
    #[error("{record}: values must form name/part pairs, found odd count {found}")]
    UnpairedValues { record: String, found: usize },
    /// A token did not map to any member of its field's vocabulary.
    #[error("{record}: unrecognized {field} `{token}`")]
    UnknownToken {
        record: String,
        field: &'static str,
        token: String,
    },
    /// A numeric field failed to parse as a decimal number.
    #[error("{record}: invalid number `{token}` for {field}")]
    InvalidNumber {
        record: String,
        field: &'static str,
        token: String,
    },
    /// A numeric field parsed but is below its documented minimum.
    #[error("{record}: {field} {value} is below the minimum of {min}")]
    BelowMinimum {
        record: String,
        field: &'static str,
        value: String,
        min: String,
    },
}

/// Caller misuse, signaled distinctly from data errors: the failure is in
/// the wiring, not in the record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// A variant was initialized from a record carrying a different tag.
    #[error("record `{record}` does not belong to attribute `{expected}`")]
    NameMismatch {
        expected: &'static str,
        record: String,
    },
    /// A variant declared an empty canonical name.
    #[error("attribute variant is missing its canonical name")]
    MissingName,
    /// A discriminator-specific accessor was called under a non-matching
    /// discriminator.
    #[error("accessor `{accessor}` requires file function {required}, but this record is `{actual}`")]
    WrongFunction {
        accessor: &'static str,
        required: &'static str,
        actual: String,
    },
}

/// Umbrella over both error classes, returned by construction entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttrError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl AttrError {
    /// True when the failure is a data error rather than caller misuse.
    pub fn is_format(&self) -> bool {
        matches!(self, AttrError::Format(_))
    }
}
