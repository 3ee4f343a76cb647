//! The `.FileFunction` attribute: a discriminated union keyed by its first
//! value.
//!
//! The discriminator token selects one of ~20 sub-schemas, each with its
//! own cardinality and field checks:
//!
//! - `Copper`: 3-4 values; layer `L<n>` (n >= 1); side; optional copper type.
//! - `Plated`/`NonPlated`: 4-5 values; from/to layers; hole type; optional
//!   fabrication method.
//! - `Profile`: 2 values; edge treatment (`P`/`NP`).
//! - `Component`: 3 values; layer; side.
//! - `Legend` and the mask family (`Soldermask`, `Carbonmask`, `Goldmask`,
//!   `Heatsinkmask`, `Peelablemask`, `Silvermask`, `Tinmask`): 2-3 values;
//!   side; optional one-based index.
//! - `Paste`, `Glue`, `Depthrout`, `Pads`, `AssemblyDrawing`: 2 values; side.
//! - `Vcut`: 1-2 values; a missing side reads as `Both`.
//! - `Other`/`OtherDrawing`: 2 values; free-form description.
//! - `ArrayDrawing`, `Drillmap`, `FabricationDrawing`, `Vcutmap`,
//!   `Viafill`: exactly 1 value.
//! - An unrecognized discriminator always fails validation.
//!
//! The match over [`FunctionTag`] is exhaustive, so a new tag without
//! validation logic is a build failure, not a runtime hole. Accessors are
//! gated by discriminator family: reading a copper layer out of a profile
//! record is a contract error, never a silent empty value.

use crate::error::{ContractError, FormatError};
use crate::schema::{
    check_count, parse_positive_int, render_record, require_token, AttrData, StandardAttribute,
};
use crate::vocab::{
    CopperType, EdgeTreatment, FabricationMethod, FunctionTag, HoleType, MaskType, Side,
    Vocabulary,
};

/// Layer token syntax is `L<n>`; returns `None` for anything else.
fn layer_number(token: &str) -> Option<u32> {
    token.strip_prefix('L')?.parse().ok()
}

/// `.FileFunction`: the function of the file in the fabrication data set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFunction {
    data: AttrData,
}

impl FileFunction {
    /// The discriminator, recomputed from the first value; `Unknown` for
    /// unmapped tokens.
    pub fn tag(&self) -> FunctionTag {
        FunctionTag::from_token(self.data.value(0))
    }

    fn render(&self) -> String {
        render_record(Self::NAME, &self.data.values)
    }

    fn check_layer(&self, index: usize, field: &'static str) -> Result<u32, FormatError> {
        let token = self.data.value(index);
        let n = layer_number(token).ok_or_else(|| FormatError::InvalidNumber {
            record: self.render(),
            field,
            token: token.to_string(),
        })?;
        if n < 1 {
            return Err(FormatError::BelowMinimum {
                record: self.render(),
                field,
                value: n.to_string(),
                min: "1".to_string(),
            });
        }
        Ok(n)
    }

    fn require_family(
        &self,
        accessor: &'static str,
        required: &'static str,
        matches: bool,
    ) -> Result<(), ContractError> {
        if matches {
            Ok(())
        } else {
            Err(ContractError::WrongFunction {
                accessor,
                required,
                actual: self.data.value(0).to_string(),
            })
        }
    }

    /// Copper or component placement layer index. `Copper`/`Component` only.
    pub fn layer(&self) -> Result<u32, ContractError> {
        self.require_family(
            "layer",
            "`Copper` or `Component`",
            matches!(self.tag(), FunctionTag::Copper | FunctionTag::Component),
        )?;
        Ok(layer_number(self.data.value(1)).unwrap_or_default())
    }

    /// The board side the function applies to. Valid for every sided
    /// family; a v-cut record without a side reads as `Both`.
    pub fn side(&self) -> Result<Side, ContractError> {
        let tag = self.tag();
        match tag {
            FunctionTag::Copper | FunctionTag::Component => {
                Ok(Side::from_token(self.data.value(2)))
            }
            FunctionTag::Paste
            | FunctionTag::Glue
            | FunctionTag::Depthrout
            | FunctionTag::Pads
            | FunctionTag::AssemblyDrawing => Ok(Side::from_token(self.data.value(1))),
            FunctionTag::Vcut => {
                if self.data.len() < 2 {
                    Ok(Side::Both)
                } else {
                    Ok(Side::from_token(self.data.value(1)))
                }
            }
            _ if tag.is_mask_family() => Ok(Side::from_token(self.data.value(1))),
            _ => Err(ContractError::WrongFunction {
                accessor: "side",
                required: "a sided function",
                actual: self.data.value(0).to_string(),
            }),
        }
    }

    /// The copper usage of a `Copper` file, when the optional fourth value
    /// is present.
    pub fn copper_type(&self) -> Result<Option<CopperType>, ContractError> {
        self.require_family("copper_type", "`Copper`", self.tag() == FunctionTag::Copper)?;
        if self.data.len() < 4 {
            return Ok(None);
        }
        Ok(Some(CopperType::from_token(self.data.value(3))))
    }

    /// First layer of the drill span. `Plated`/`NonPlated` only.
    pub fn from_layer(&self) -> Result<u32, ContractError> {
        self.require_family(
            "from_layer",
            "`Plated` or `NonPlated`",
            matches!(self.tag(), FunctionTag::Plated | FunctionTag::NonPlated),
        )?;
        Ok(layer_number(self.data.value(1)).unwrap_or_default())
    }

    /// Last layer of the drill span. `Plated`/`NonPlated` only.
    pub fn to_layer(&self) -> Result<u32, ContractError> {
        self.require_family(
            "to_layer",
            "`Plated` or `NonPlated`",
            matches!(self.tag(), FunctionTag::Plated | FunctionTag::NonPlated),
        )?;
        Ok(layer_number(self.data.value(2)).unwrap_or_default())
    }

    /// Kind of holes in the drill span. `Plated`/`NonPlated` only.
    pub fn hole_type(&self) -> Result<HoleType, ContractError> {
        self.require_family(
            "hole_type",
            "`Plated` or `NonPlated`",
            matches!(self.tag(), FunctionTag::Plated | FunctionTag::NonPlated),
        )?;
        Ok(HoleType::from_token(self.data.value(3)))
    }

    /// How the holes are made, when the optional fifth value is present.
    pub fn fabrication_method(&self) -> Result<Option<FabricationMethod>, ContractError> {
        self.require_family(
            "fabrication_method",
            "`Plated` or `NonPlated`",
            matches!(self.tag(), FunctionTag::Plated | FunctionTag::NonPlated),
        )?;
        if self.data.len() < 5 {
            return Ok(None);
        }
        Ok(Some(FabricationMethod::from_token(self.data.value(4))))
    }

    /// Edge plating of the board outline. `Profile` only.
    pub fn edge_treatment(&self) -> Result<EdgeTreatment, ContractError> {
        self.require_family(
            "edge_treatment",
            "`Profile`",
            self.tag() == FunctionTag::Profile,
        )?;
        Ok(EdgeTreatment::from_token(self.data.value(1)))
    }

    /// The mask material, derived from the discriminator itself. Mask
    /// functions only (`Legend` is not a mask).
    pub fn mask_type(&self) -> Result<MaskType, ContractError> {
        let tag = self.tag();
        self.require_family(
            "mask_type",
            "a mask function",
            tag.is_mask_family() && tag != FunctionTag::Legend,
        )?;
        Ok(MaskType::from_token(self.data.value(0)))
    }

    /// One-based index distinguishing several legend/mask files on the
    /// same side, when the optional value is present.
    pub fn mask_index(&self) -> Result<Option<u32>, ContractError> {
        self.require_family(
            "mask_index",
            "`Legend` or a mask function",
            self.tag().is_mask_family(),
        )?;
        if self.data.len() < 3 {
            return Ok(None);
        }
        Ok(self.data.value(2).parse().ok())
    }

    /// Free-form description. `Other`/`OtherDrawing` only.
    pub fn description(&self) -> Result<&str, ContractError> {
        self.require_family(
            "description",
            "`Other` or `OtherDrawing`",
            matches!(self.tag(), FunctionTag::Other | FunctionTag::OtherDrawing),
        )?;
        Ok(self.data.value(1))
    }
}

impl StandardAttribute for FileFunction {
    const NAME: &'static str = ".FileFunction";

    fn data(&self) -> &AttrData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut AttrData {
        &mut self.data
    }

    fn validate(&self) -> Result<(), FormatError> {
        let name = Self::NAME;
        let vals = &self.data.values;
        match self.tag() {
            FunctionTag::Copper => {
                check_count(name, vals, 3, Some(4))?;
                self.check_layer(1, "copper layer")?;
                require_token::<Side>(name, vals, 2)?;
                if vals.len() == 4 {
                    require_token::<CopperType>(name, vals, 3)?;
                }
                Ok(())
            }
            FunctionTag::Plated | FunctionTag::NonPlated => {
                check_count(name, vals, 4, Some(5))?;
                self.check_layer(1, "from layer")?;
                self.check_layer(2, "to layer")?;
                require_token::<HoleType>(name, vals, 3)?;
                if vals.len() == 5 {
                    require_token::<FabricationMethod>(name, vals, 4)?;
                }
                Ok(())
            }
            FunctionTag::Profile => {
                check_count(name, vals, 2, Some(2))?;
                require_token::<EdgeTreatment>(name, vals, 1)?;
                Ok(())
            }
            FunctionTag::Component => {
                check_count(name, vals, 3, Some(3))?;
                self.check_layer(1, "component layer")?;
                require_token::<Side>(name, vals, 2)?;
                Ok(())
            }
            FunctionTag::Legend
            | FunctionTag::Soldermask
            | FunctionTag::Carbonmask
            | FunctionTag::Goldmask
            | FunctionTag::Heatsinkmask
            | FunctionTag::Peelablemask
            | FunctionTag::Silvermask
            | FunctionTag::Tinmask => {
                check_count(name, vals, 2, Some(3))?;
                require_token::<Side>(name, vals, 1)?;
                if vals.len() == 3 {
                    parse_positive_int(name, vals, 2, "mask index")?;
                }
                Ok(())
            }
            FunctionTag::Paste
            | FunctionTag::Glue
            | FunctionTag::Depthrout
            | FunctionTag::Pads
            | FunctionTag::AssemblyDrawing => {
                check_count(name, vals, 2, Some(2))?;
                require_token::<Side>(name, vals, 1)?;
                Ok(())
            }
            FunctionTag::Vcut => {
                // A bare `Vcut` is common in the field; the side then
                // defaults to Both instead of failing.
                check_count(name, vals, 1, Some(2))?;
                if vals.len() == 2 {
                    require_token::<Side>(name, vals, 1)?;
                }
                Ok(())
            }
            FunctionTag::Other | FunctionTag::OtherDrawing => {
                check_count(name, vals, 2, Some(2))
            }
            FunctionTag::Drillmap
            | FunctionTag::FabricationDrawing
            | FunctionTag::ArrayDrawing
            | FunctionTag::Vcutmap
            | FunctionTag::Viafill => check_count(name, vals, 1, Some(1)),
            FunctionTag::Unknown => Err(FormatError::UnknownToken {
                record: self.render(),
                field: FunctionTag::FIELD,
                token: self.data.value(0).to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_token_syntax() {
        assert_eq!(layer_number("L1"), Some(1));
        assert_eq!(layer_number("L12"), Some(12));
        assert_eq!(layer_number("L0"), Some(0));
        assert_eq!(layer_number("12"), None);
        assert_eq!(layer_number("Labc"), None);
        assert_eq!(layer_number(""), None);
    }
}
