//! Property tests for the xMetaDissPlus normalization rules.

mod common;

use common::{minimal_record, test_config, test_vocabulary};
use dnb_xmetadiss::record::{Right, Subject, VocabularyRef};
use dnb_xmetadiss::xmetadiss::{ddc_notation, dnb_language, split_publisher, UNKNOWN_PLACE};
use dnb_xmetadiss::{map_xmetadissplus, XmlElement};
use proptest::prelude::*;

proptest! {
    #[test]
    fn language_codes_other_than_deu_pass_through(code in "[a-z]{2,3}") {
        prop_assume!(code != "deu");
        prop_assert_eq!(dnb_language(&code), code.as_str());
    }

    #[test]
    fn language_of_record_written_to_title_and_language(code in "[a-z]{3}") {
        let mut record = minimal_record(true);
        record.metadata.languages = vec![VocabularyRef::new(code.clone())];
        let tree = map_xmetadissplus(&record, &test_config(), &test_vocabulary()).unwrap();

        let expected = if code == "deu" { "ger" } else { code.as_str() };
        prop_assert_eq!(tree.child("dc:title").and_then(|t| t.attr("lang")), Some(expected));
        prop_assert_eq!(tree.child("dc:language").and_then(XmlElement::text), Some(expected));
    }

    #[test]
    fn publisher_split_on_first_and_last_slash(
        institution in "[A-Za-z][A-Za-z .-]{0,20}",
        middle in prop::collection::vec("[A-Za-z ]{0,8}", 0..3),
        place in "[A-Za-z .-]{0,20}[A-Za-z]",
    ) {
        let mut publisher = institution.clone();
        for part in &middle {
            publisher.push('/');
            publisher.push_str(part);
        }
        publisher.push_str(" / ");
        publisher.push_str(&place);

        let parts = split_publisher(&publisher);
        prop_assert_eq!(parts.institution, institution.trim_end());
        prop_assert_eq!(parts.place, place.trim_start());
    }

    #[test]
    fn publisher_without_slash_has_unknown_place(publisher in "[^/]{1,40}") {
        let parts = split_publisher(&publisher);
        prop_assert_eq!(parts.place, UNKNOWN_PLACE);
        prop_assert_eq!(parts.institution, publisher.trim_end());
    }

    #[test]
    fn ddc_subject_written_as_last_segment(
        path in prop::collection::vec("[a-z0-9]{1,6}", 0..4),
        notation in "[0-9]{3}",
    ) {
        let mut id = path.join("/");
        if !id.is_empty() {
            id.push('/');
        }
        id.push_str(&notation);
        prop_assert_eq!(ddc_notation(&id), notation.as_str());

        let mut record = minimal_record(true);
        record.metadata.subjects = vec![Subject {
            subject: Some("ignored".to_string()),
            scheme: Some("DDC".to_string()),
            id: Some(id),
        }];
        let tree = map_xmetadissplus(&record, &test_config(), &test_vocabulary()).unwrap();
        let subject = tree.child("dc:subject").unwrap();
        prop_assert_eq!(subject.attr("xsi:type"), Some("xMetaDiss:DDC-SG"));
        prop_assert_eq!(subject.text(), Some(notation.as_str()));
    }

    #[test]
    fn cc_licence_ids_written_verbatim(suffix in "[a-z0-9.-]{0,12}") {
        let id = format!("cc-{suffix}");
        let mut record = minimal_record(true);
        record.metadata.rights = vec![Right {
            id: Some(id.clone()),
            ..Right::default()
        }];
        let tree = map_xmetadissplus(&record, &test_config(), &test_vocabulary()).unwrap();

        let cc: Vec<_> = tree
            .children_named("ddb:licence")
            .filter(|l| l.attr("ddb:licenceType") == Some("cc"))
            .collect();
        prop_assert_eq!(cc.len(), 1);
        prop_assert_eq!(cc[0].text(), Some(id.as_str()));
    }
}

#[test]
fn deu_is_written_as_ger() {
    assert_eq!(dnb_language("deu"), "ger");
}
