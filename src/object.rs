//! Object and aperture attributes: net and pin identity, drill tolerances,
//! and flashed text annotations.

use rust_decimal::Decimal;

use crate::error::FormatError;
use crate::schema::{
    check_count, parse_nonneg_decimal, require_token, AttrData, StandardAttribute,
};
use crate::vocab::{MirrorFlag, TextRepresentation, Vocabulary};

/// `.N`: names of the electrical nets an object belongs to. An open list
/// with at least one entry; objects connecting several nets (e.g. pads of
/// a resistor array aperture) list them all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Net {
    data: AttrData,
}

impl Net {
    pub fn net_count(&self) -> usize {
        self.data.len()
    }

    pub fn net(&self, index: usize) -> &str {
        self.data.value(index)
    }

    pub fn nets(&self) -> &[String] {
        &self.data.values
    }
}

impl StandardAttribute for Net {
    const NAME: &'static str = ".N";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 1, None)
    }
}

/// `.P`: pin identity of a pad: component reference designator, pin
/// number, and an optional pin function.
///
/// The documented shape is refdes plus number, but some generators in the
/// field emit only the refdes. A count of 1 is accepted and the missing
/// pin number reads as empty; tightening this breaks real files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pin {
    data: AttrData,
}

impl Pin {
    pub fn reference(&self) -> &str {
        self.data.value(0)
    }

    /// Pin number, empty when the generator omitted it.
    pub fn number(&self) -> &str {
        self.data.value(1)
    }

    /// Pin function, empty when absent.
    pub fn function(&self) -> &str {
        self.data.value(2)
    }
}

impl StandardAttribute for Pin {
    const NAME: &'static str = ".P";

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

/// `.DrillTolerance`: plus and minus deviation allowed on a hole diameter,
/// both non-negative decimals in the file unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillTolerance {
    data: AttrData,
}

impl DrillTolerance {
    pub fn plus(&self) -> Decimal {
        self.data.value(0).parse().unwrap_or_default()
    }

    pub fn minus(&self) -> Decimal {
        self.data.value(1).parse().unwrap_or_default()
    }
}

impl StandardAttribute for DrillTolerance {
    const NAME: &'static str = ".DrillTolerance";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 2, Some(2))?;
        parse_nonneg_decimal(Self::NAME, &self.data.values, 0, "plus tolerance")?;
        parse_nonneg_decimal(Self::NAME, &self.data.values, 1, "minus tolerance")?;
        Ok(())
    }
}

/// `.FlashText`: metadata of text flashed as graphics. Two mandatory
/// fields (the text and its representation, barcode or characters) and
/// four optional trailing fields: mirror flag, font name, font size, and a
/// free comment. The mirror flag, when present, must be one of the two
/// defined single-character codes; any optional field defaults to empty
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashText {
    data: AttrData,
}

impl FlashText {
    pub fn text(&self) -> &str {
        self.data.value(0)
    }

    pub fn representation(&self) -> TextRepresentation {
        TextRepresentation::from_token(self.data.value(1))
    }

    pub fn mirrored(&self) -> bool {
        MirrorFlag::from_token(self.data.value(2)) == MirrorFlag::Mirrored
    }

    pub fn font(&self) -> &str {
        self.data.value(3)
    }

    pub fn font_size(&self) -> &str {
        self.data.value(4)
    }

    pub fn comment(&self) -> &str {
        self.data.value(5)
    }
}

impl StandardAttribute for FlashText {
    const NAME: &'static str = ".FlashText";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        check_count(Self::NAME, &self.data.values, 2, Some(6))?;
        require_token::<TextRepresentation>(Self::NAME, &self.data.values, 1)?;
        // Absent or empty mirror field is fine; a present token must map.
        if self.data.len() >= 3 && !self.data.value(2).is_empty() {
            require_token::<MirrorFlag>(Self::NAME, &self.data.values, 2)?;
        }
        Ok(())
    }
}
