//! Integration tests for the `.FileFunction` discriminated union: one
//! section per sub-schema family, plus accessor gating and the unknown
//! discriminator.

use gerber_attrs::function::FileFunction;
use gerber_attrs::{
    AttrError, AttributeKind, ContractError, CopperType, EdgeTreatment, FabricationMethod,
    FormatError, FunctionTag, GenericRecord, HoleType, MaskType, Side, StandardAttribute,
};

fn function(values: &[&str]) -> Result<FileFunction, AttrError> {
    let record = GenericRecord::new(
        ".FileFunction",
        AttributeKind::File,
        values.iter().map(|v| v.to_string()).collect(),
    );
    FileFunction::from_record(&record)
}

// ==================== Copper ====================

#[test]
fn copper_without_type() {
    let f = function(&["Copper", "L2", "Top"]).expect("three values");
    assert_eq!(f.tag(), FunctionTag::Copper);
    assert_eq!(f.layer().unwrap(), 2);
    assert_eq!(f.side().unwrap(), Side::Top);
    assert_eq!(f.copper_type().unwrap(), None);
}

#[test]
fn copper_with_type() {
    let f = function(&["Copper", "L4", "Inr", "Plane"]).expect("four values");
    assert_eq!(f.layer().unwrap(), 4);
    assert_eq!(f.side().unwrap(), Side::Inner);
    assert_eq!(f.copper_type().unwrap(), Some(CopperType::Plane));
}

#[test]
fn copper_layer_zero_is_a_range_error() {
    match function(&["Copper", "L0", "Top"]).unwrap_err() {
        AttrError::Format(FormatError::BelowMinimum { .. }) => {}
        other => panic!("expected a range error, got {:?}", other),
    }
}

#[test]
fn copper_layer_without_prefix_is_a_format_error() {
    match function(&["Copper", "2", "Top"]).unwrap_err() {
        AttrError::Format(FormatError::InvalidNumber { .. }) => {}
        other => panic!("expected a number-format error, got {:?}", other),
    }
}

#[test]
fn copper_rejects_unknown_side_and_type() {
    assert!(function(&["Copper", "L2", "Sideways"]).is_err());
    assert!(function(&["Copper", "L2", "Top", "Wavy"]).is_err());
    assert!(function(&["Copper", "L2"]).is_err());
}

// ==================== Drill spans ====================

#[test]
fn plated_span() {
    let f = function(&["Plated", "L1", "L4", "PTH"]).expect("four values");
    assert_eq!(f.from_layer().unwrap(), 1);
    assert_eq!(f.to_layer().unwrap(), 4);
    assert_eq!(f.hole_type().unwrap(), HoleType::PlatedThrough);
    assert_eq!(f.fabrication_method().unwrap(), None);
}

#[test]
fn non_plated_span_with_method() {
    let f = function(&["NonPlated", "L1", "L2", "Blind", "Rout"]).expect("five values");
    assert_eq!(f.hole_type().unwrap(), HoleType::Blind);
    assert_eq!(f.fabrication_method().unwrap(), Some(FabricationMethod::Rout));
}

#[test]
fn drill_span_field_checks() {
    assert!(function(&["Plated", "L0", "L4", "PTH"]).is_err());
    assert!(function(&["Plated", "L1", "LX", "PTH"]).is_err());
    assert!(function(&["Plated", "L1", "L4", "Slot"]).is_err());
    assert!(function(&["Plated", "L1", "L4", "PTH", "Laser"]).is_err());
    assert!(function(&["Plated", "L1", "L4"]).is_err());
}

// ==================== Profile & component ====================

#[test]
fn profile_edge_treatment() {
    let f = function(&["Profile", "NP"]).expect("two values");
    assert_eq!(f.edge_treatment().unwrap(), EdgeTreatment::NonPlated);
    assert!(function(&["Profile", "X"]).is_err());
    assert!(function(&["Profile"]).is_err());
}

#[test]
fn component_layer_and_side() {
    let f = function(&["Component", "L1", "Bot"]).expect("three values");
    assert_eq!(f.layer().unwrap(), 1);
    assert_eq!(f.side().unwrap(), Side::Bottom);
    assert!(function(&["Component", "L1"]).is_err());
}

// ==================== Legend / mask family ====================

#[test]
fn soldermask_with_index() {
    let f = function(&["Soldermask", "Top", "2"]).expect("indexed mask");
    assert_eq!(f.mask_type().unwrap(), MaskType::Solder);
    assert_eq!(f.side().unwrap(), Side::Top);
    assert_eq!(f.mask_index().unwrap(), Some(2));
}

#[test]
fn legend_without_index() {
    let f = function(&["Legend", "Bot"]).expect("two values");
    assert_eq!(f.side().unwrap(), Side::Bottom);
    assert_eq!(f.mask_index().unwrap(), None);
}

#[test]
fn mask_index_must_be_positive_numeric() {
    assert!(matches!(
        function(&["Goldmask", "Top", "0"]).unwrap_err(),
        AttrError::Format(FormatError::BelowMinimum { .. })
    ));
    assert!(matches!(
        function(&["Goldmask", "Top", "first"]).unwrap_err(),
        AttrError::Format(FormatError::InvalidNumber { .. })
    ));
}

#[test]
fn every_mask_token_validates() {
    for tag in [
        "Legend",
        "Soldermask",
        "Carbonmask",
        "Goldmask",
        "Heatsinkmask",
        "Peelablemask",
        "Silvermask",
        "Tinmask",
    ] {
        function(&[tag, "Top"]).unwrap_or_else(|e| panic!("{} should validate: {}", tag, e));
    }
}

// ==================== Two-value sided functions ====================

#[test]
fn sided_pair_functions() {
    for tag in ["Paste", "Glue", "Depthrout", "Pads", "AssemblyDrawing"] {
        let f = function(&[tag, "Bot"]).unwrap_or_else(|e| panic!("{}: {}", tag, e));
        assert_eq!(f.side().unwrap(), Side::Bottom);
        assert!(function(&[tag]).is_err(), "{} needs a side", tag);
        assert!(function(&[tag, "Middle"]).is_err(), "{} side must map", tag);
    }
}

#[test]
fn vcut_missing_side_defaults_to_both() {
    let f = function(&["Vcut"]).expect("bare Vcut is accepted");
    assert_eq!(f.side().unwrap(), Side::Both);

    let f = function(&["Vcut", "Top"]).expect("explicit side");
    assert_eq!(f.side().unwrap(), Side::Top);

    assert!(function(&["Vcut", "Middle"]).is_err());
}

// ==================== Free-form and single-value functions ====================

#[test]
fn other_carries_a_description() {
    let f = function(&["Other", "impedance test structure"]).expect("two values");
    assert_eq!(f.description().unwrap(), "impedance test structure");
    assert!(function(&["Other"]).is_err());
    assert!(function(&["OtherDrawing", "panel notes"]).is_ok());
}

#[test]
fn single_value_drawings() {
    for tag in ["Drillmap", "FabricationDrawing", "ArrayDrawing", "Vcutmap", "Viafill"] {
        assert!(function(&[tag]).is_ok(), "{} stands alone", tag);
        assert!(function(&[tag, "Top"]).is_err(), "{} takes no side", tag);
    }
}

// ==================== Unknown discriminator ====================

#[test]
fn unknown_discriminator_always_fails() {
    match function(&["Bogus"]).unwrap_err() {
        AttrError::Format(FormatError::UnknownToken { field, token, .. }) => {
            assert_eq!(field, "file function");
            assert_eq!(token, "Bogus");
        }
        other => panic!("expected an unknown-token error, got {:?}", other),
    }
    // Count is irrelevant once the discriminator is unknown.
    assert!(function(&["Bogus", "L1", "Top"]).is_err());
    assert!(function(&[]).is_err());
}

// ==================== Accessor gating ====================

#[test]
fn accessors_reject_foreign_discriminators() {
    let profile = function(&["Profile", "P"]).expect("profile");
    for err in [
        profile.layer().unwrap_err(),
        profile.copper_type().unwrap_err(),
        profile.hole_type().unwrap_err(),
        profile.mask_index().unwrap_err(),
        profile.description().unwrap_err(),
        profile.side().unwrap_err(),
    ] {
        assert!(
            matches!(err, ContractError::WrongFunction { .. }),
            "expected a usage error, got {:?}",
            err
        );
    }

    let copper = function(&["Copper", "L1", "Top"]).expect("copper");
    assert!(copper.edge_treatment().is_err());
    assert!(copper.from_layer().is_err());

    // Legend shares the mask family schema but is not a mask material.
    let legend = function(&["Legend", "Top"]).expect("legend");
    assert!(legend.mask_type().is_err());
}

#[test]
fn validate_is_idempotent_across_families() {
    for values in [
        vec!["Copper", "L1", "Top"],
        vec!["Vcut"],
        vec!["Soldermask", "Bot", "1"],
        vec!["Plated", "L1", "L2", "Buried", "Drill"],
    ] {
        let f = function(&values).expect("valid");
        f.validate().expect("first re-run");
        f.validate().expect("second re-run");
    }
}
