mod common;

use afe_validate_core::afe::DocumentData;
use afe_validate_core::afe::xml::parse::{ParseError, parse_afe_xml_file};

#[test]
fn parse_record_rooted_fixture() {
    let data = parse_afe_xml_file(&common::afe_fixture("valid-please.xml")).expect("parse");
    assert_eq!(
        data,
        DocumentData::new(
            "Please approve the workover on well 07W089",
            "2024-01-01",
            "2024-03-31"
        )
    );
}

#[test]
fn parse_wrapped_fixture_with_default_namespace() {
    let data =
        parse_afe_xml_file(&common::afe_fixture("wrapped-equal-dates.xml")).expect("parse");
    assert_eq!(data.description, "Drilling program, PLEASE expedite");
    assert_eq!(data.start_date, "2024-06-15T00:00:00");
    assert_eq!(data.end_date, "2024-06-15");
}

#[test]
fn parse_empty_fields_as_empty_strings() {
    let data = parse_afe_xml_file(&common::afe_fixture("empty-fields.xml")).expect("parse");
    assert_eq!(data, DocumentData::default());
}

#[test]
fn structural_fixtures_report_missing_elements() {
    let err = parse_afe_xml_file(&common::afe_fixture("missing-document-data.xml")).unwrap_err();
    assert!(matches!(err, ParseError::MissingElement("DocumentData")));

    let err = parse_afe_xml_file(&common::afe_fixture("wrong-namespace.xml")).unwrap_err();
    assert!(matches!(err, ParseError::MissingElement("DocumentData")));
}

#[test]
fn malformed_fixture_is_a_parse_error() {
    let err = parse_afe_xml_file(&common::afe_fixture("malformed.xml")).unwrap_err();
    assert!(matches!(err, ParseError::XmlParse(_)), "{err:?}");
}

#[test]
fn missing_fields_are_structural_errors() {
    let err = parse_afe_xml_file(&common::afe_fixture("missing-start-date.xml")).unwrap_err();
    assert!(matches!(err, ParseError::MissingElement("START_DATE")), "{err:?}");

    let err = parse_afe_xml_file(&common::afe_fixture("missing-description.xml")).unwrap_err();
    assert!(matches!(err, ParseError::MissingElement("DESCRIPTION")), "{err:?}");
}

#[test]
fn duplicate_attribute_fixture_is_a_parse_error() {
    let err = parse_afe_xml_file(&common::afe_fixture("duplicate-attribute.xml")).unwrap_err();
    assert!(matches!(err, ParseError::XmlParse(_)), "{err:?}");
}

#[test]
fn declared_encodings_are_decoded() {
    let data = parse_afe_xml_file(&common::afe_fixture("latin1-encoded.xml")).expect("parse");
    assert_eq!(data.description, "Please approve the café workover");

    let data = parse_afe_xml_file(&common::afe_fixture("utf16-bom.xml")).expect("parse");
    assert_eq!(data.description, "Please approve the über workover");
    assert_eq!(data.start_date, "2024-01-01");
}
