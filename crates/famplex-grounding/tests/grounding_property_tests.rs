use famplex_grounding::{
    build_grounding_map, normalize_rows, parse_rows, write_rows_to, CsvDialect, Grounding, Row,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_-]{0,8}").unwrap()
}

fn namespace() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("GO".to_string()),
        Just("CHEBI".to_string()),
        Just("CHEMBL".to_string()),
        Just("HGNC".to_string()),
        Just("UP".to_string()),
        Just("FPLX".to_string()),
        Just(String::new()),
    ]
}

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        proptest::string::string_regex("[A-Z0-9]{1,7}").unwrap(),
    ]
}

/// A name plus three (namespace, identifier) pairs, possibly blank.
fn padded_row() -> impl Strategy<Value = Row> {
    (name(), proptest::collection::vec((namespace(), identifier()), 3)).prop_map(|(n, pairs)| {
        let mut row = vec![n];
        for (ns, id) in pairs {
            row.push(ns);
            row.push(id);
        }
        row
    })
}

/// Arbitrary field text, including delimiters, quotes and line breaks.
fn awkward_field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z ,\"\r\n]{0,6}").unwrap()
}

proptest! {
    #[test]
    fn normalize_preserves_width(rows in proptest::collection::vec(padded_row(), 0..10)) {
        let out = normalize_rows(&rows).unwrap();
        prop_assert_eq!(out.len(), rows.len());
        for (before, after) in rows.iter().zip(&out) {
            prop_assert_eq!(before.len(), after.len());
            prop_assert_eq!(&before[0], &after[0]);
        }
    }

    #[test]
    fn built_refs_hold_text_plus_distinct_non_blank_namespaces(row in padded_row()) {
        let gmap = build_grounding_map(std::slice::from_ref(&row)).unwrap();
        let expected: BTreeSet<&str> = row[1..]
            .chunks_exact(2)
            .filter(|pair| !pair[0].is_empty() && !pair[1].is_empty())
            .map(|pair| pair[0].as_str())
            .collect();

        match gmap.get(&row[0]).unwrap() {
            Grounding::Ungrounded => prop_assert!(expected.is_empty()),
            Grounding::Grounded(refs) => {
                prop_assert_eq!(refs.text(), row[0].as_str());
                prop_assert_eq!(refs.len(), expected.len() + 1);
                let got: BTreeSet<&str> = refs.namespaces().collect();
                prop_assert_eq!(got, expected);
            }
        }
    }

    #[test]
    fn written_rows_load_back_unchanged(
        rows in proptest::collection::vec(
            proptest::collection::vec(awkward_field(), 1..6),
            0..8,
        )
    ) {
        let dialect = CsvDialect::default();
        let mut buf = Vec::new();
        write_rows_to(&mut buf, &rows, &dialect).unwrap();
        let back = parse_rows(&buf, &dialect).unwrap();
        prop_assert_eq!(back, rows);
    }
}
