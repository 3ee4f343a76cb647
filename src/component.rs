//! The `.C*` component characteristics family: simple one-value variants
//! plus the paired supplier list.
//!
//! These attributes travel as object attributes (`TO`) on component flashes
//! in assembly-data files. Most are exact-one-value scalars; the exceptions
//! are `.CHgt`/`.CRot` (decimal payloads), `.CMnt` (enumerated), and
//! `.CSup` (an open name/part-number pair list).

use rust_decimal::Decimal;

use crate::error::FormatError;
use crate::schema::{
    check_count, parse_decimal, parse_nonneg_decimal, render_record, require_token, AttrData,
    StandardAttribute,
};
use crate::vocab::{Mounting, Vocabulary};

/// `.C`: reference designator of the component (e.g. `R31`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentReferenceDesignator {
    data: AttrData,
}

impl ComponentReferenceDesignator {
    pub fn reference(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentReferenceDesignator {
    const NAME: &'static str = ".C";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CFtp`: footprint name of the component as written by the ECAD tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFootprint {
    data: AttrData,
}

impl ComponentFootprint {
    pub fn footprint(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentFootprint {
    const NAME: &'static str = ".CFtp";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CHgt`: height of the component over the board, a non-negative decimal
/// in the file unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentHeight {
    data: AttrData,
}

impl ComponentHeight {
    /// The validated height. Reads the stored token; after a successful
    /// `validate` the parse cannot fail.
    pub fn height(&self) -> Decimal {
        self.data.value(0).parse().unwrap_or_default()
    }
}

impl StandardAttribute for ComponentHeight {
    const NAME: &'static str = ".CHgt";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))?;
        parse_nonneg_decimal(Self::NAME, &self.data.values, 0, "component height")?;
        Ok(())
    }
}

/// `.CLbD`: description of the component in the library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentLibraryDescription {
    data: AttrData,
}

impl ComponentLibraryDescription {
    pub fn description(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentLibraryDescription {
    const NAME: &'static str = ".CLbD";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CLbN`: name of the library the component comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentLibraryName {
    data: AttrData,
}

impl ComponentLibraryName {
    pub fn library(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentLibraryName {
    const NAME: &'static str = ".CLbN";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CMfr`: manufacturer of the component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentManufacturer {
    data: AttrData,
}

impl ComponentManufacturer {
    pub fn manufacturer(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentManufacturer {
    const NAME: &'static str = ".CMfr";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CMnt`: mounting technology of the component. The token must map to a
/// defined [`Mounting`] member; `Unknown` fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMounting {
    data: AttrData,
}

impl ComponentMounting {
    pub fn mounting(&self) -> Mounting {
        Mounting::from_token(self.data.value(0))
    }
}

impl StandardAttribute for ComponentMounting {
    const NAME: &'static str = ".CMnt";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))?;
        require_token::<Mounting>(Self::NAME, &self.data.values, 0)?;
        Ok(())
    }
}

/// `.CPgD`: description of the component package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentPackageDescription {
    data: AttrData,
}

impl ComponentPackageDescription {
    pub fn description(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentPackageDescription {
    const NAME: &'static str = ".CPgD";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CPgN`: name of the component package (e.g. `SOIC-8`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentPackageName {
    data: AttrData,
}

impl ComponentPackageName {
    pub fn package(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentPackageName {
    const NAME: &'static str = ".CPgN";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}

/// `.CRot`: rotation of the component in degrees, counterclockwise. Any
/// decimal is accepted, negative included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRotation {
    data: AttrData,
}

impl ComponentRotation {
    pub fn rotation(&self) -> Decimal {
        self.data.value(0).parse().unwrap_or_default()
    }
}

impl StandardAttribute for ComponentRotation {
    const NAME: &'static str = ".CRot";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))?;
        parse_decimal(Self::NAME, &self.data.values, 0, "component rotation")?;
        Ok(())
    }
}

/// `.CSup`: suppliers of the component, as an open list of
/// (supplier name, supplier part number) pairs. At least one pair is
/// required and the value count must be even; an odd count fails with a
/// pairing error even when it falls inside the accepted range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSupplier {
    data: AttrData,
}

impl ComponentSupplier {
    pub fn supplier_count(&self) -> usize {
        self.data.len() / 2
    }

    /// Supplier name of pair `index`.
    pub fn supplier_name(&self, index: usize) -> &str {
        self.data.value(2 * index)
    }

    /// Supplier part number of pair `index`.
    pub fn supplier_part(&self, index: usize) -> &str {
        self.data.value(2 * index + 1)
    }
}

impl StandardAttribute for ComponentSupplier {
    const NAME: &'static str = ".CSup";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 2, None)?;
        if self.data.len() % 2 != 0 {
            return Err(FormatError::UnpairedValues {
                record: render_record(Self::NAME, &self.data.values),
                found: self.data.len(),
            });
        }
        Ok(())
    }
}

/// `.CVal`: value of the component (e.g. `220nF`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentValue {
    data: AttrData,
}

impl ComponentValue {
    pub fn value(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for ComponentValue {
    const NAME: &'static str = ".CVal";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))
    }
}
