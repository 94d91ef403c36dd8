use traitdex::descriptor::Implementor;
use traitdex::payload::{FragmentPayload, PayloadError};

mod common;
use common::*;

/********************
 * Parsing
 ********************/

#[test]
fn test_parses_generated_fragment_shape() {
    let payload = FragmentPayload::from_json(NUM_BIGINT_JSON).unwrap();
    assert_eq!(payload.module_count(), 1);
    assert_eq!(payload.entry_count(), 3);

    let (module, entries) = payload.modules().next().unwrap();
    assert_eq!(module, "num_bigint");
    let texts: Vec<_> = entries["Hash"].iter().map(|imp| imp.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "impl Hash for Sign",
            "impl Hash for BigInt",
            "impl Hash for BigUint"
        ]
    );
}

#[test]
fn test_module_order_follows_the_document() {
    let payload = FragmentPayload::from_json(BYTEORDER_SYN_JSON).unwrap();
    let modules: Vec<_> = payload.modules().map(|(module, _)| module.as_str()).collect();
    assert_eq!(modules, ["byteorder", "syn"]);
}

#[test]
fn test_optional_descriptor_fields_default() {
    let payload =
        FragmentPayload::from_json(r#"{"crate1": {"Hash": [{"text": "impl Hash for Foo"}]}}"#)
            .unwrap();
    let (_, entries) = payload.modules().next().unwrap();
    let imp = &entries["Hash"][0];
    assert!(!imp.synthetic);
    assert!(imp.types.is_empty());
}

#[test]
fn test_markup_entities_pass_through_untouched() {
    // The documentation compiler escapes generics; the core must not
    // interpret them.
    let payload = FragmentPayload::from_json(
        r#"{"ggbc": {"Hash": [
            {"text": "impl&lt;T:&nbsp;Hash&gt; Hash for Source&lt;T&gt;", "synthetic": false, "types": []}
        ]}}"#,
    )
    .unwrap();
    let (_, entries) = payload.modules().next().unwrap();
    assert_eq!(
        entries["Hash"][0].text,
        "impl&lt;T:&nbsp;Hash&gt; Hash for Source&lt;T&gt;"
    );
}

/********************
 * Shape errors
 ********************/

#[test]
fn test_error_names_offending_trait() {
    let err = FragmentPayload::from_json(r#"{"crate1": {"Hash": {"text": "x"}}}"#).unwrap_err();
    match err {
        PayloadError::TraitShape {
            module,
            trait_id,
            found,
        } => {
            assert_eq!(module, "crate1");
            assert_eq!(trait_id, "Hash");
            assert_eq!(found, "an object");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_names_offending_implementor_position() {
    let err = FragmentPayload::from_json(
        r#"{"crate1": {"Hash": [{"text": "impl Hash for Foo"}, {"text": 7}]}}"#,
    )
    .unwrap_err();
    match err {
        PayloadError::ImplementorShape { position, .. } => assert_eq!(position, 1),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_json_input_reports_parse_error() {
    let err = FragmentPayload::from_json("window.pending_implementors = {};").unwrap_err();
    assert!(matches!(err, PayloadError::Json { .. }));
}

/********************
 * Builder
 ********************/

#[test]
fn test_builder_matches_parsed_equivalent() {
    let built = FragmentPayload::builder()
        .with_implementors(
            "num_bigint",
            "Hash",
            [
                Implementor::new("impl Hash for Sign"),
                Implementor::new("impl Hash for BigInt"),
                Implementor::new("impl Hash for BigUint"),
            ],
        )
        .build();
    let parsed = FragmentPayload::from_json(NUM_BIGINT_JSON).unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_builder_appends_across_calls() {
    let payload = FragmentPayload::builder()
        .with_implementor("a", "Hash", Implementor::new("impl Hash for X"))
        .with_implementor("a", "Hash", Implementor::new("impl Hash for Y"))
        .build();
    let (_, entries) = payload.modules().next().unwrap();
    assert_eq!(entries["Hash"].len(), 2);
}
