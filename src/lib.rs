//! # gerber-attrs — Gerber X2 standard attribute decoding
//!
//! Decodes and validates the standard-attribute sublanguage of the Gerber
//! X2 fabrication format: short, tagged, positional-value records
//! (`.FileFunction`, `.CFtp`, `.P`, ...) attached to a file, an aperture,
//! or graphical objects.
//!
//! ## Structure
//!
//! - **Record**: the generic `{name, kind, values}` triple produced by the
//!   upstream tokenizer ([`record`]).
//! - **Schema contract**: the trait every variant implements, plus shared
//!   cardinality/field helpers ([`schema`]).
//! - **Variants**: the component family ([`component`]), file-level
//!   attributes ([`file`]), object/aperture attributes ([`object`]), and
//!   the discriminated-union `.FileFunction` ([`function`]).
//! - **Vocabularies**: closed token sets with an `Unknown` sentinel
//!   ([`vocab`]).
//! - **Registry**: name-based dispatch into the closed variant set
//!   ([`registry`]).
//!
//! ## Usage
//!
//! ```
//! use gerber_attrs::{decode, AttributeKind, GenericRecord, StandardAttributeValue};
//!
//! let record = GenericRecord::new(
//!     ".FileFunction",
//!     AttributeKind::File,
//!     vec!["Copper".into(), "L2".into(), "Top".into()],
//! );
//! let decoded = decode(&record).unwrap().unwrap();
//! if let StandardAttributeValue::FileFunction(f) = decoded {
//!     assert_eq!(f.layer().unwrap(), 2);
//! }
//! ```
//!
//! Errors come in two disjoint classes: [`FormatError`] for bad data and
//! [`ContractError`] for caller misuse; see [`error`].

pub mod component;
pub mod error;
pub mod file;
pub mod function;
pub mod object;
pub mod record;
pub mod registry;
pub mod schema;
pub mod vocab;

pub use error::{AttrError, ContractError, FormatError};
pub use record::{AttributeKind, GenericRecord};
pub use registry::{decode, is_standard, StandardAttributeValue, STANDARD_NAMES};
pub use schema::StandardAttribute;
pub use vocab::{
    CopperType, EdgeTreatment, FabricationMethod, FunctionTag, HoleType, MaskType, MirrorFlag,
    Mounting, PartKind, PolarityKind, Side, TextRepresentation, Vocabulary,
};
