//! The schema contract every standard attribute variant satisfies, plus the
//! shared cardinality and field-check helpers.
//!
//! A variant is either built in one step ([`StandardAttribute::from_record`])
//! or default-constructed and bound later ([`StandardAttribute::init`]). Both
//! entry points funnel through the same `validate`, so each variant's rules
//! have exactly one source of truth. After a successful construction the
//! variant is immutable; `validate` is pure in the values sequence and may be
//! re-run at any time with the same outcome.

use rust_decimal::Decimal;

use crate::error::{AttrError, ContractError, FormatError};
use crate::record::{AttributeKind, GenericRecord};
use crate::vocab::Vocabulary;

/// Owned copy of a record's category and values, held by every variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrData {
    pub kind: AttributeKind,
    pub values: Vec<String>,
}

impl AttrData {
    /// Value at `index`, or the empty string when the position is absent.
    /// Optional trailing positions read through this, so a variant never
    /// indexes outside the interval actually present.
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The capability shared by all standard attribute variants.
///
/// `NAME` is the variant's canonical record tag. Making it an associated
/// constant (rather than an overridable method with a placeholder default)
/// means a variant cannot forget its identity; the empty-name check in
/// `init` only guards against a deliberately empty constant.
pub trait StandardAttribute: Default {
    /// Canonical record tag, unique and non-empty across the variant set.
    const NAME: &'static str;

    fn data(&self) -> &AttrData;
    fn data_mut(&mut self) -> &mut AttrData;

    /// Check cardinality and field well-formedness against this variant's
    /// schema. Run automatically by `init`/`from_record`; never required
    /// again for correctness, but safe to repeat.
    fn validate(&self) -> Result<(), FormatError>;

    /// Bind this variant to `record`'s data, then validate.
    ///
    /// Fails with a [`ContractError`] when `record.name` is not this
    /// variant's canonical tag; that is a wiring bug, not bad data. On any
    /// failure the variant must not be used further.
    fn init(&mut self, record: &GenericRecord) -> Result<(), AttrError> {
        if Self::NAME.is_empty() {
            return Err(ContractError::MissingName.into());
        }
        if record.name != Self::NAME {
            return Err(ContractError::NameMismatch {
                expected: Self::NAME,
                record: record.name.clone(),
            }
            .into());
        }
        *self.data_mut() = AttrData {
            kind: record.kind,
            values: record.values.clone(),
        };
        self.validate()?;
        Ok(())
    }

    /// Construct and validate in one step. Either the result is fully
    /// valid or the call fails; no partially-valid instance escapes.
    fn from_record(record: &GenericRecord) -> Result<Self, AttrError> {
        let mut attr = Self::default();
        attr.init(record)?;
        Ok(attr)
    }

    fn kind(&self) -> AttributeKind {
        self.data().kind
    }

    fn values(&self) -> &[String] {
        &self.data().values
    }

    /// The record this variant was decoded from, reconstructed from the
    /// canonical name and the owned values.
    fn to_record(&self) -> GenericRecord {
        GenericRecord::new(Self::NAME, self.kind(), self.values().to_vec())
    }
}

/// Render a record's textual form for error context: `.Name,v1,v2`.
pub fn render_record(name: &str, values: &[String]) -> String {
    if values.is_empty() {
        name.to_string()
    } else {
        format!("{},{}", name, values.join(","))
    }
}

/// Closed-interval cardinality check; `max` of `None` means unbounded.
/// The exact-count form is `check_count(name, values, n, Some(n))`.
pub fn check_count(
    name: &str,
    values: &[String],
    min: usize,
    max: Option<usize>,
) -> Result<(), FormatError> {
    let found = values.len();
    if found >= min && max.map_or(true, |m| found <= m) {
        return Ok(());
    }
    let expected = match max {
        Some(m) if m == min => format!("exactly {}", min),
        Some(m) => format!("{} to {}", min, m),
        None => format!("at least {}", min),
    };
    Err(FormatError::ValueCount {
        record: render_record(name, values),
        expected,
        found,
    })
}

/// Map `values[index]` through vocabulary `V`, rejecting the `Unknown`
/// sentinel with an unknown-token error.
pub fn require_token<V: Vocabulary>(
    name: &str,
    values: &[String],
    index: usize,
) -> Result<V, FormatError> {
    let token = values.get(index).map(String::as_str).unwrap_or("");
    let mapped = V::from_token(token);
    if mapped.is_unknown() {
        return Err(FormatError::UnknownToken {
            record: render_record(name, values),
            field: V::FIELD,
            token: token.to_string(),
        });
    }
    Ok(mapped)
}

/// Locale-independent decimal parse of `values[index]`. A token that is
/// not a decimal number is an invalid-number error, distinct from any
/// range error on the parsed value.
pub fn parse_decimal(
    name: &str,
    values: &[String],
    index: usize,
    field: &'static str,
) -> Result<Decimal, FormatError> {
    let token = values.get(index).map(String::as_str).unwrap_or("");
    token.parse::<Decimal>().map_err(|_| FormatError::InvalidNumber {
        record: render_record(name, values),
        field,
        token: token.to_string(),
    })
}

/// Decimal parse plus a non-negativity check.
pub fn parse_nonneg_decimal(
    name: &str,
    values: &[String],
    index: usize,
    field: &'static str,
) -> Result<Decimal, FormatError> {
    let value = parse_decimal(name, values, index, field)?;
    if value < Decimal::ZERO {
        return Err(FormatError::BelowMinimum {
            record: render_record(name, values),
            field,
            value: value.to_string(),
            min: "0".to_string(),
        });
    }
    Ok(value)
}

/// Integer parse of `values[index]` with a minimum of 1 (layer indexes and
/// the mask-family index are one-based).
pub fn parse_positive_int(
    name: &str,
    values: &[String],
    index: usize,
    field: &'static str,
) -> Result<u32, FormatError> {
    let token = values.get(index).map(String::as_str).unwrap_or("");
    let value: u32 = token.parse().map_err(|_| FormatError::InvalidNumber {
        record: render_record(name, values),
        field,
        token: token.to_string(),
    })?;
    if value < 1 {
        return Err(FormatError::BelowMinimum {
            record: render_record(name, values),
            field,
            value: value.to_string(),
            min: "1".to_string(),
        });
    }
    Ok(value)
}
