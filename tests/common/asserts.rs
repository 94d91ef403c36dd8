use traitdex::registry::ImplementorRegistry;

#[allow(dead_code)]
pub fn assert_query_texts(registry: &ImplementorRegistry, trait_id: &str, expected: &[&str]) {
    let texts: Vec<String> = registry
        .query(trait_id)
        .into_iter()
        .map(|imp| imp.text)
        .collect();
    assert_eq!(
        texts, expected,
        "unexpected implementor listing for '{trait_id}'"
    );
}

#[allow(dead_code)]
pub fn assert_trait_unknown(registry: &ImplementorRegistry, trait_id: &str) {
    assert!(
        registry.query(trait_id).is_empty(),
        "expected no implementors for '{trait_id}'"
    );
    assert!(!registry.contains(trait_id));
    assert_eq!(registry.implementor_count(trait_id), 0);
}
