//! Name-based dispatch from generic records to decoded attribute variants.
//!
//! The variant set is closed: [`decode`] matches the record name against
//! the static table and returns `Ok(None)` for anything it does not
//! recognize (user attributes and future standard attributes are left to
//! the caller). Adding a variant means touching the sum type, the table,
//! and the dispatch match; the compiler flags a partial update.

use crate::component::{
    ComponentFootprint, ComponentHeight, ComponentLibraryDescription, ComponentLibraryName,
    ComponentManufacturer, ComponentMounting, ComponentPackageDescription, ComponentPackageName,
    ComponentReferenceDesignator, ComponentRotation, ComponentSupplier, ComponentValue,
};
use crate::error::AttrError;
use crate::file::{
    FileCreationDate, FileGenerationSoftware, FileMD5, FilePart, FilePolarity, FileProjectId,
    FileSameCoordinates,
};
use crate::function::FileFunction;
use crate::object::{DrillTolerance, FlashText, Net, Pin};
use crate::record::GenericRecord;
use crate::schema::StandardAttribute;

/// Canonical names of every standard attribute this crate decodes.
pub static STANDARD_NAMES: &[&str] = &[
    ComponentReferenceDesignator::NAME,
    ComponentFootprint::NAME,
    ComponentHeight::NAME,
    ComponentLibraryDescription::NAME,
    ComponentLibraryName::NAME,
    ComponentManufacturer::NAME,
    ComponentMounting::NAME,
    ComponentPackageDescription::NAME,
    ComponentPackageName::NAME,
    ComponentRotation::NAME,
    ComponentSupplier::NAME,
    ComponentValue::NAME,
    FileCreationDate::NAME,
    FileFunction::NAME,
    FileGenerationSoftware::NAME,
    FileMD5::NAME,
    FilePart::NAME,
    FilePolarity::NAME,
    FileProjectId::NAME,
    FileSameCoordinates::NAME,
    Net::NAME,
    Pin::NAME,
    DrillTolerance::NAME,
    FlashText::NAME,
];

/// True when `name` is a standard attribute tag this crate decodes.
pub fn is_standard(name: &str) -> bool {
    STANDARD_NAMES.contains(&name)
}

/// A decoded standard attribute: the closed sum over all variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardAttributeValue {
    ComponentReferenceDesignator(ComponentReferenceDesignator),
    ComponentFootprint(ComponentFootprint),
    ComponentHeight(ComponentHeight),
    ComponentLibraryDescription(ComponentLibraryDescription),
    ComponentLibraryName(ComponentLibraryName),
    ComponentManufacturer(ComponentManufacturer),
    ComponentMounting(ComponentMounting),
    ComponentPackageDescription(ComponentPackageDescription),
    ComponentPackageName(ComponentPackageName),
    ComponentRotation(ComponentRotation),
    ComponentSupplier(ComponentSupplier),
    ComponentValue(ComponentValue),
    FileCreationDate(FileCreationDate),
    FileFunction(FileFunction),
    FileGenerationSoftware(FileGenerationSoftware),
    FileMD5(FileMD5),
    FilePart(FilePart),
    FilePolarity(FilePolarity),
    FileProjectId(FileProjectId),
    FileSameCoordinates(FileSameCoordinates),
    Net(Net),
    Pin(Pin),
    DrillTolerance(DrillTolerance),
    FlashText(FlashText),
}

impl StandardAttributeValue {
    /// The canonical tag of the decoded variant.
    pub fn name(&self) -> &'static str {
        use StandardAttributeValue as V;
        match self {
            V::ComponentReferenceDesignator(_) => ComponentReferenceDesignator::NAME,
            V::ComponentFootprint(_) => ComponentFootprint::NAME,
            V::ComponentHeight(_) => ComponentHeight::NAME,
            V::ComponentLibraryDescription(_) => ComponentLibraryDescription::NAME,
            V::ComponentLibraryName(_) => ComponentLibraryName::NAME,
            V::ComponentManufacturer(_) => ComponentManufacturer::NAME,
            V::ComponentMounting(_) => ComponentMounting::NAME,
            V::ComponentPackageDescription(_) => ComponentPackageDescription::NAME,
            V::ComponentPackageName(_) => ComponentPackageName::NAME,
            V::ComponentRotation(_) => ComponentRotation::NAME,
            V::ComponentSupplier(_) => ComponentSupplier::NAME,
            V::ComponentValue(_) => ComponentValue::NAME,
            V::FileCreationDate(_) => FileCreationDate::NAME,
            V::FileFunction(_) => FileFunction::NAME,
            V::FileGenerationSoftware(_) => FileGenerationSoftware::NAME,
            V::FileMD5(_) => FileMD5::NAME,
            V::FilePart(_) => FilePart::NAME,
            V::FilePolarity(_) => FilePolarity::NAME,
            V::FileProjectId(_) => FileProjectId::NAME,
            V::FileSameCoordinates(_) => FileSameCoordinates::NAME,
            V::Net(_) => Net::NAME,
            V::Pin(_) => Pin::NAME,
            V::DrillTolerance(_) => DrillTolerance::NAME,
            V::FlashText(_) => FlashText::NAME,
        }
    }

    /// Reconstruct the record this attribute was decoded from. Re-decoding
    /// the result yields an equal attribute.
    pub fn to_record(&self) -> GenericRecord {
        use StandardAttributeValue as V;
        match self {
            V::ComponentReferenceDesignator(a) => a.to_record(),
            V::ComponentFootprint(a) => a.to_record(),
            V::ComponentHeight(a) => a.to_record(),
            V::ComponentLibraryDescription(a) => a.to_record(),
            V::ComponentLibraryName(a) => a.to_record(),
            V::ComponentManufacturer(a) => a.to_record(),
            V::ComponentMounting(a) => a.to_record(),
            V::ComponentPackageDescription(a) => a.to_record(),
            V::ComponentPackageName(a) => a.to_record(),
            V::ComponentRotation(a) => a.to_record(),
            V::ComponentSupplier(a) => a.to_record(),
            V::ComponentValue(a) => a.to_record(),
            V::FileCreationDate(a) => a.to_record(),
            V::FileFunction(a) => a.to_record(),
            V::FileGenerationSoftware(a) => a.to_record(),
            V::FileMD5(a) => a.to_record(),
            V::FilePart(a) => a.to_record(),
            V::FilePolarity(a) => a.to_record(),
            V::FileProjectId(a) => a.to_record(),
            V::FileSameCoordinates(a) => a.to_record(),
            V::Net(a) => a.to_record(),
            V::Pin(a) => a.to_record(),
            V::DrillTolerance(a) => a.to_record(),
            V::FlashText(a) => a.to_record(),
        }
    }
}

/// Decode and validate a record by its name.
///
/// Returns `Ok(None)` for names outside the standard set; the caller
/// decides how to treat those. A `Some` result is fully validated.
pub fn decode(record: &GenericRecord) -> Result<Option<StandardAttributeValue>, AttrError> {
    use StandardAttributeValue as V;
    let decoded = match record.name.as_str() {
        ComponentReferenceDesignator::NAME => {
            V::ComponentReferenceDesignator(ComponentReferenceDesignator::from_record(record)?)
        }
        ComponentFootprint::NAME => V::ComponentFootprint(ComponentFootprint::from_record(record)?),
        ComponentHeight::NAME => V::ComponentHeight(ComponentHeight::from_record(record)?),
        ComponentLibraryDescription::NAME => {
            V::ComponentLibraryDescription(ComponentLibraryDescription::from_record(record)?)
        }
        ComponentLibraryName::NAME => {
            V::ComponentLibraryName(ComponentLibraryName::from_record(record)?)
        }
        ComponentManufacturer::NAME => {
            V::ComponentManufacturer(ComponentManufacturer::from_record(record)?)
        }
        ComponentMounting::NAME => V::ComponentMounting(ComponentMounting::from_record(record)?),
        ComponentPackageDescription::NAME => {
            V::ComponentPackageDescription(ComponentPackageDescription::from_record(record)?)
        }
        ComponentPackageName::NAME => {
            V::ComponentPackageName(ComponentPackageName::from_record(record)?)
        }
        ComponentRotation::NAME => V::ComponentRotation(ComponentRotation::from_record(record)?),
        ComponentSupplier::NAME => V::ComponentSupplier(ComponentSupplier::from_record(record)?),
        ComponentValue::NAME => V::ComponentValue(ComponentValue::from_record(record)?),
        FileCreationDate::NAME => V::FileCreationDate(FileCreationDate::from_record(record)?),
        FileFunction::NAME => V::FileFunction(FileFunction::from_record(record)?),
        FileGenerationSoftware::NAME => {
            V::FileGenerationSoftware(FileGenerationSoftware::from_record(record)?)
        }
        FileMD5::NAME => V::FileMD5(FileMD5::from_record(record)?),
        FilePart::NAME => V::FilePart(FilePart::from_record(record)?),
        FilePolarity::NAME => V::FilePolarity(FilePolarity::from_record(record)?),
        FileProjectId::NAME => V::FileProjectId(FileProjectId::from_record(record)?),
        FileSameCoordinates::NAME => {
            V::FileSameCoordinates(FileSameCoordinates::from_record(record)?)
        }
        Net::NAME => V::Net(Net::from_record(record)?),
        Pin::NAME => V::Pin(Pin::from_record(record)?),
        DrillTolerance::NAME => V::DrillTolerance(DrillTolerance::from_record(record)?),
        FlashText::NAME => V::FlashText(FlashText::from_record(record)?),
        _ => return Ok(None),
    };
    Ok(Some(decoded))
}
