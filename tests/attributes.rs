//! Integration tests for the simple, list, and optional-suffix variants:
//! cardinality, vocabulary mapping, numeric checks, construction contract,
//! and round-trip.

use gerber_attrs::component::{
    ComponentHeight, ComponentMounting, ComponentRotation, ComponentSupplier,
};
use gerber_attrs::file::{FilePolarity, FileProjectId};
use gerber_attrs::object::{DrillTolerance, FlashText, Net, Pin};
use gerber_attrs::{
    decode, AttrError, AttributeKind, ContractError, FormatError, GenericRecord, Mounting,
    PolarityKind, StandardAttribute, StandardAttributeValue, TextRepresentation,
};

fn record(name: &str, kind: AttributeKind, values: &[&str]) -> GenericRecord {
    GenericRecord::new(name, kind, values.iter().map(|v| v.to_string()).collect())
}

// ==================== Construction contract ====================

#[test]
fn init_rejects_mismatched_name() {
    let r = record(".CVal", AttributeKind::Object, &["10k"]);
    let err = ComponentHeight::from_record(&r).unwrap_err();
    assert!(
        matches!(err, AttrError::Contract(ContractError::NameMismatch { .. })),
        "wiring a record to the wrong variant is a contract error: {:?}",
        err
    );
}

#[test]
fn two_phase_init_matches_one_step_construction() {
    let r = record(".CMnt", AttributeKind::Object, &["SMD"]);
    let one_step = ComponentMounting::from_record(&r).expect("one-step");
    let mut two_phase = ComponentMounting::default();
    two_phase.init(&r).expect("init");
    assert_eq!(one_step, two_phase);
}

#[test]
fn validate_is_idempotent() {
    let r = record(".CSup", AttributeKind::Object, &["ACME", "123"]);
    let sup = ComponentSupplier::from_record(&r).expect("valid");
    for _ in 0..3 {
        sup.validate().expect("still valid");
    }
    assert_eq!(sup.supplier_name(0), "ACME");
}

#[test]
fn failed_construction_yields_no_instance() {
    let r = record(".CHgt", AttributeKind::Object, &["-1"]);
    assert!(ComponentHeight::from_record(&r).is_err());
    // Same failure through the dispatch layer.
    assert!(decode(&r).is_err());
}

// ==================== Numeric scalars ====================

#[test]
fn height_distinguishes_range_from_format_errors() {
    let below = record(".CHgt", AttributeKind::Object, &["-0.5"]);
    match ComponentHeight::from_record(&below).unwrap_err() {
        AttrError::Format(FormatError::BelowMinimum { .. }) => {}
        other => panic!("expected a range error, got {:?}", other),
    }

    let garbled = record(".CHgt", AttributeKind::Object, &["abc"]);
    match ComponentHeight::from_record(&garbled).unwrap_err() {
        AttrError::Format(FormatError::InvalidNumber { .. }) => {}
        other => panic!("expected a number-format error, got {:?}", other),
    }
}

#[test]
fn drill_tolerance_both_fields_checked() {
    let ok = record(".DrillTolerance", AttributeKind::Aperture, &["0.1", "0.05"]);
    let tol = DrillTolerance::from_record(&ok).expect("valid tolerances");
    assert_eq!(tol.plus().to_string(), "0.1");
    assert_eq!(tol.minus().to_string(), "0.05");

    let negative = record(".DrillTolerance", AttributeKind::Aperture, &["0.1", "-0.05"]);
    assert!(matches!(
        DrillTolerance::from_record(&negative).unwrap_err(),
        AttrError::Format(FormatError::BelowMinimum { .. })
    ));
}

#[test]
fn rotation_has_no_range_restriction() {
    let r = record(".CRot", AttributeKind::Object, &["-359.99"]);
    assert!(ComponentRotation::from_record(&r).is_ok());
}

// ==================== Enumerated scalars ====================

#[test]
fn mounting_smd_maps_bga_fails() {
    let smd = record(".CMnt", AttributeKind::Object, &["SMD"]);
    let m = ComponentMounting::from_record(&smd).expect("SMD is defined");
    assert_eq!(m.mounting(), Mounting::SurfaceMount);

    let bga = record(".CMnt", AttributeKind::Object, &["BGA"]);
    match ComponentMounting::from_record(&bga).unwrap_err() {
        AttrError::Format(FormatError::UnknownToken { token, .. }) => {
            assert_eq!(token, "BGA");
        }
        other => panic!("expected an unknown-token error, got {:?}", other),
    }
}

#[test]
fn polarity_tokens() {
    let pos = record(".FilePolarity", AttributeKind::File, &["Positive"]);
    let p = FilePolarity::from_record(&pos).expect("positive");
    assert_eq!(p.polarity(), PolarityKind::Positive);

    let bad = record(".FilePolarity", AttributeKind::File, &["Pos"]);
    assert!(FilePolarity::from_record(&bad).is_err());
}

// ==================== List variants ====================

#[test]
fn supplier_one_pair_passes_odd_count_fails() {
    let one_pair = record(".CSup", AttributeKind::Object, &["ACME", "123"]);
    let sup = ComponentSupplier::from_record(&one_pair).expect("one pair");
    assert_eq!(sup.supplier_count(), 1);

    // Count 3 is inside [2, unbounded) but breaks pairing.
    let odd = record(".CSup", AttributeKind::Object, &["ACME", "123", "XYZ"]);
    match ComponentSupplier::from_record(&odd).unwrap_err() {
        AttrError::Format(FormatError::UnpairedValues { found, .. }) => assert_eq!(found, 3),
        other => panic!("expected a pairing error, got {:?}", other),
    }
}

#[test]
fn supplier_needs_at_least_one_pair() {
    let empty = record(".CSup", AttributeKind::Object, &[]);
    assert!(matches!(
        ComponentSupplier::from_record(&empty).unwrap_err(),
        AttrError::Format(FormatError::ValueCount { .. })
    ));
}

#[test]
fn net_open_list() {
    let multi = record(".N", AttributeKind::Object, &["GND", "VCC", "NetR1_2"]);
    let net = Net::from_record(&multi).expect("three nets");
    assert_eq!(net.net_count(), 3);
    assert_eq!(net.net(2), "NetR1_2");

    let empty = record(".N", AttributeKind::Object, &[]);
    assert!(Net::from_record(&empty).is_err());
}

// ==================== Optional-suffix variants ====================

#[test]
fn flash_text_defaults_and_mirror_check() {
    let minimal = record(".FlashText", AttributeKind::Aperture, &["HELLO", "C"]);
    let text = FlashText::from_record(&minimal).expect("two mandatory fields");
    assert_eq!(text.text(), "HELLO");
    assert_eq!(text.representation(), TextRepresentation::Characters);
    assert!(!text.mirrored());
    assert_eq!(text.font(), "");
    assert_eq!(text.font_size(), "");
    assert_eq!(text.comment(), "");

    let bad_mirror = record(".FlashText", AttributeKind::Aperture, &["HELLO", "C", "Q"]);
    assert!(matches!(
        FlashText::from_record(&bad_mirror).unwrap_err(),
        AttrError::Format(FormatError::UnknownToken { .. })
    ));
}

#[test]
fn flash_text_representation_must_be_defined() {
    let bad = record(".FlashText", AttributeKind::Aperture, &["HELLO", "X"]);
    assert!(FlashText::from_record(&bad).is_err());
}

#[test]
fn flash_text_full_form() {
    let full = record(
        ".FlashText",
        AttributeKind::Aperture,
        &["SN-0042", "B", "R", "Arial", "1.5", "serial number"],
    );
    let text = FlashText::from_record(&full).expect("all six fields");
    assert_eq!(text.representation(), TextRepresentation::Barcode);
    assert_eq!(text.font(), "Arial");
    assert_eq!(text.font_size(), "1.5");
    assert_eq!(text.comment(), "serial number");
}

#[test]
fn pin_leniency_and_limits() {
    // Refdes-only records come from non-conformant generators and are
    // accepted; the pin number reads as empty.
    let short = record(".P", AttributeKind::Object, &["J1"]);
    let pin = Pin::from_record(&short).expect("lenient");
    assert_eq!(pin.number(), "");

    let too_long = record(".P", AttributeKind::Object, &["J1", "1", "GPIO", "extra"]);
    assert!(Pin::from_record(&too_long).is_err());
}

// ==================== Dispatch & round-trip ====================

#[test]
fn dispatch_by_name() {
    let r = record(".ProjectId", AttributeKind::File, &["board", "guid-1", "rev-A"]);
    match decode(&r).expect("valid").expect("standard") {
        StandardAttributeValue::FileProjectId(p) => {
            assert_eq!(p.id(), "board");
            assert_eq!(p.guid(), "guid-1");
            assert_eq!(p.revision(), "rev-A");
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn round_trip_preserves_equality() {
    let records = [
        record(".CMnt", AttributeKind::Object, &["TH"]),
        record(".CSup", AttributeKind::Object, &["ACME", "123", "XYZ Corp", "A-9"]),
        record(".FlashText", AttributeKind::Aperture, &["HELLO", "C"]),
        record(".FileFunction", AttributeKind::File, &["Copper", "L2", "Top"]),
        record(".P", AttributeKind::Object, &["U3", "7"]),
        record(".SameCoordinates", AttributeKind::File, &[]),
    ];
    for original in records {
        let decoded = decode(&original).expect("valid").expect("standard");
        let rebuilt = decoded.to_record();
        assert_eq!(rebuilt, original);
        let redecoded = decode(&rebuilt).expect("valid").expect("standard");
        assert_eq!(redecoded, decoded);
    }
}

#[test]
fn project_id_requires_all_three_values() {
    let short = record(".ProjectId", AttributeKind::File, &["board", "guid-1"]);
    match FileProjectId::from_record(&short).unwrap_err() {
        AttrError::Format(FormatError::ValueCount { expected, found, .. }) => {
            assert_eq!(expected, "exactly 3");
            assert_eq!(found, 2);
        }
        other => panic!("expected a count error, got {:?}", other),
    }
}

#[test]
fn error_messages_carry_the_record_form() {
    let odd = record(".CSup", AttributeKind::Object, &["ACME", "123", "XYZ"]);
    let msg = ComponentSupplier::from_record(&odd).unwrap_err().to_string();
    assert!(msg.contains(".CSup,ACME,123,XYZ"), "message: {}", msg);
}
