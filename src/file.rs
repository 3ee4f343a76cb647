//! File-level attributes other than `.FileFunction`: identity, provenance,
//! and polarity of the file as a whole.

use crate::error::FormatError;
use crate::schema::{check_count, require_token, AttrData, StandardAttribute};
use crate::vocab::{PartKind, PolarityKind, Vocabulary};

/// `.CreationDate`: the moment the file was generated, as written by the
/// generator (ISO 8601 in conformant files). Stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCreationDate {
    data: AttrData,
}

impl FileCreationDate {
    pub fn date(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for FileCreationDate {
    const NAME: &'static str = ".CreationDate";

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

/// `.GenerationSoftware`: vendor, application, and version of the generator.
/// Only the vendor is mandatory; the trailing fields default to empty when
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileGenerationSoftware {
    data: AttrData,
}

impl FileGenerationSoftware {
    pub fn vendor(&self) -> &str {
        self.data.value(0)
    }

    pub fn application(&self) -> &str {
        self.data.value(1)
    }

    pub fn version(&self) -> &str {
        self.data.value(2)
    }
}

impl StandardAttribute for FileGenerationSoftware {
    const NAME: &'static str = ".GenerationSoftware";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(3))
    }
}

/// `.MD5`: hex digest of the file content up to this attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMD5 {
    data: AttrData,
}

impl FileMD5 {
    pub fn digest(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for FileMD5 {
    const NAME: &'static str = ".MD5";

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

/// `.Part`: what the file represents within the production set. The kind
/// must be a defined [`PartKind`]; when the kind is `Other` the descriptive
/// second value is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePart {
    data: AttrData,
}

impl FilePart {
    pub fn part(&self) -> PartKind {
        PartKind::from_token(self.data.value(0))
    }

    /// Free-form description, only meaningful for `Other`.
    pub fn detail(&self) -> &str {
        self.data.value(1)
    }
}

impl StandardAttribute for FilePart {
    const NAME: &'static str = ".Part";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(2))?;
        let kind = require_token::<PartKind>(Self::NAME, &self.data.values, 0)?;
        if kind == PartKind::Other {
            check_count(Self::NAME, &self.data.values, 2, Some(2))?;
        }
        Ok(())
    }
}

/// `.FilePolarity`: whether the image is positive or negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePolarity {
    data: AttrData,
}

impl FilePolarity {
    pub fn polarity(&self) -> PolarityKind {
        PolarityKind::from_token(self.data.value(0))
    }
}

impl StandardAttribute for FilePolarity {
    const NAME: &'static str = ".FilePolarity";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, Some(1))?;
        require_token::<PolarityKind>(Self::NAME, &self.data.values, 0)?;
        Ok(())
    }
}

/// `.ProjectId`: project name, GUID, and revision identifying the design
/// the file belongs to. All three values are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileProjectId {
    data: AttrData,
}

impl FileProjectId {
    pub fn id(&self) -> &str {
        self.data.value(0)
    }

    pub fn guid(&self) -> &str {
        self.data.value(1)
    }

    pub fn revision(&self) -> &str {
        self.data.value(2)
    }
}

impl StandardAttribute for FileProjectId {
    const NAME: &'static str = ".ProjectId";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 3, Some(3))
    }
}

/// `.SameCoordinates`: marks files of a set as sharing one coordinate
/// system. The ident is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSameCoordinates {
    data: AttrData,
}

impl FileSameCoordinates {
    pub fn ident(&self) -> &str {
        self.data.value(0)
    }
}

impl StandardAttribute for FileSameCoordinates {
    const NAME: &'static str = ".SameCoordinates";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 0, Some(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AttributeKind, GenericRecord};

    fn file_record(name: &str, values: &[&str]) -> GenericRecord {
        GenericRecord::new(
            name,
            AttributeKind::File,
            values.iter().map(|v| v.to_string()).collect(),
        )
    }

    #[test]
    fn part_other_needs_detail() {
        let r = file_record(".Part", &["Other"]);
        assert!(FilePart::from_record(&r).is_err());
        let r = file_record(".Part", &["Other", "test coupon strip"]);
        let part = FilePart::from_record(&r).expect("detail provided");
        assert_eq!(part.part(), PartKind::Other);
        assert_eq!(part.detail(), "test coupon strip");
    }

    #[test]
    fn part_single_stands_alone() {
        let r = file_record(".Part", &["Single"]);
        let part = FilePart::from_record(&r).expect("single");
        assert_eq!(part.part(), PartKind::Single);
        assert_eq!(part.detail(), "");
    }

    #[test]
    fn generation_software_trailing_defaults() {
        let r = file_record(".GenerationSoftware", &["KiCad"]);
        let sw = FileGenerationSoftware::from_record(&r).expect("vendor only");
        assert_eq!(sw.vendor(), "KiCad");
        assert_eq!(sw.application(), "");
        assert_eq!(sw.version(), "");
    }

    #[test]
    fn same_coordinates_allows_empty() {
        let r = file_record(".SameCoordinates", &[]);
        let sc = FileSameCoordinates::from_record(&r).expect("no ident");
        assert_eq!(sc.ident(), "");
    }
}
