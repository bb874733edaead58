use handling_meta_editor::xml::ParseOptions;
use handling_meta_editor::{
    parse_handling_meta, parse_handling_meta_with, Axis, HandlingField, HandlingXmlError,
    MissingFieldPolicy,
};

const SINGLE_ITEM: &str = include_str!("fixtures/single_item.meta");
const MULTI_ITEM: &str = include_str!("fixtures/multi_item.meta");

#[test]
fn test_parse_single_item_fixture() {
    let records = parse_handling_meta(SINGLE_ITEM).expect("Fixture sollte parsen");

    assert_eq!(records.len(), 1);
    let adder = &records[0];
    assert_eq!(adder.display_name(), "ADDER");
    assert_eq!(adder.item_type(), Some("CHandlingData"));
    assert_eq!(adder.scalar(HandlingField::Mass), Some("0.250000"));
    assert_eq!(adder.scalar(HandlingField::InitialDriveGears), Some("6"));
    assert_eq!(adder.scalar(HandlingField::AiHandling), Some("AVERAGE"));
    assert_eq!(adder.fields().count(), HandlingField::ALL.len());
    assert!(adder.extra_elements.is_empty());
}

#[test]
fn test_parse_multi_item_fixture_keeps_order_and_values() {
    let records = parse_handling_meta(MULTI_ITEM).expect("Fixture sollte parsen");

    let names: Vec<&str> = records.iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["ADDER", "BANSHEE", "COMET2"]);

    let banshee = records[1]
        .vector(HandlingField::CentreOfMassOffset)
        .expect("Vektorfeld vorhanden");
    assert_eq!(banshee.get(Axis::X), "0.000000");
    assert_eq!(banshee.get(Axis::Y), "0.200000");
    assert_eq!(banshee.get(Axis::Z), "-0.050000");
    assert_eq!(records[2].scalar(HandlingField::MonetaryValue), Some("8"));
}

#[test]
fn test_parse_multi_item_fixture_keeps_sub_handling_data() {
    let records = parse_handling_meta(MULTI_ITEM).expect("Fixture sollte parsen");

    assert_eq!(records[0].extra_elements.len(), 1);
    assert!(records[1].extra_elements.is_empty());

    let sub = &records[2].extra_elements[0];
    assert_eq!(sub.name, "SubHandlingData");
    assert_eq!(sub.children.len(), 2);
    assert_eq!(sub.children[0].attribute("type"), Some("CCarHandlingData"));
    let flags = sub.children[0]
        .child("strAdvancedFlags")
        .expect("Kind-Element vorhanden");
    assert_eq!(flags.text, "00000000");
    assert!(sub.children[1].is_empty());
}

#[test]
fn test_parse_without_unknown_elements_drops_sub_handling_data() {
    let options = ParseOptions {
        preserve_unknown_elements: false,
        ..ParseOptions::default()
    };
    let records = parse_handling_meta_with(MULTI_ITEM, &options).expect("Fixture sollte parsen");

    assert!(records.iter().all(|r| r.extra_elements.is_empty()));
}

#[test]
fn test_parse_rejects_item_with_removed_field() {
    let broken = SINGLE_ITEM.replace("      <fBrakeForce value=\"1.750000\" />\n", "");
    assert_ne!(broken, SINGLE_ITEM, "Fixture sollte fBrakeForce enthalten");

    let err = parse_handling_meta(&broken).expect_err("Fehlendes Feld muss abgelehnt werden");
    assert!(matches!(
        err,
        HandlingXmlError::MissingField {
            field: HandlingField::BrakeForce,
            ..
        }
    ));
    assert!(err.to_string().contains("ADDER"));
}

#[test]
fn test_parse_fill_empty_policy_accepts_removed_field() {
    let broken = SINGLE_ITEM.replace("      <fBrakeForce value=\"1.750000\" />\n", "");
    let options = ParseOptions {
        missing_fields: MissingFieldPolicy::FillEmpty,
        ..ParseOptions::default()
    };

    let records = parse_handling_meta_with(&broken, &options).expect("Leere Felder erlaubt");
    assert_eq!(records[0].scalar(HandlingField::BrakeForce), Some(""));
}

#[test]
fn test_parse_truncated_file_is_format_error() {
    let truncated = &MULTI_ITEM[..MULTI_ITEM.len() / 2];

    let err = parse_handling_meta(truncated).expect_err("Abgeschnittene Datei muss scheitern");
    assert!(matches!(err, HandlingXmlError::Format { .. }));
}

#[test]
fn test_parse_empty_container_yields_no_records() {
    let xml = "<CHandlingDataMgr><HandlingData></HandlingData></CHandlingDataMgr>";

    let records = parse_handling_meta(xml).expect("Leerer Container ist gueltig");
    assert!(records.is_empty());
}
