use traitdex::descriptor::Implementor;
use traitdex::payload::FragmentPayload;

/// First fragment of the canonical two-fragment scenario.
#[allow(dead_code)]
pub fn hash_fragment_foo() -> FragmentPayload {
    FragmentPayload::builder()
        .with_implementor("crate1", "Hash", Implementor::new("impl Hash for Foo"))
        .build()
}

/// Second fragment of the canonical two-fragment scenario.
#[allow(dead_code)]
pub fn hash_fragment_bar() -> FragmentPayload {
    FragmentPayload::builder()
        .with_implementor("crate2", "Hash", Implementor::new("impl Hash for Bar"))
        .build()
}

/// A fragment contributing to several traits from one module.
#[allow(dead_code)]
pub fn multi_trait_fragment() -> FragmentPayload {
    FragmentPayload::builder()
        .with_implementors(
            "ggbc",
            "Hash",
            [
                Implementor::new("impl Hash for Pointer"),
                Implementor::new("impl<T: Hash> Hash for Source<T>").with_types(["T"]),
                Implementor::new("impl Hash for Destination"),
            ],
        )
        .with_implementor("ggbc", "Clone", Implementor::new("impl Clone for Pointer"))
        .build()
}

/// Raw generated-fragment JSON, shaped like a real documentation build's
/// output for a numeric crate.
#[allow(dead_code)]
pub const NUM_BIGINT_JSON: &str = r#"{
    "num_bigint": {
        "Hash": [
            {"text": "impl Hash for Sign", "synthetic": false, "types": []},
            {"text": "impl Hash for BigInt", "synthetic": false, "types": []},
            {"text": "impl Hash for BigUint", "synthetic": false, "types": []}
        ]
    }
}"#;

/// Raw generated-fragment JSON covering two modules in one payload.
#[allow(dead_code)]
pub const BYTEORDER_SYN_JSON: &str = r#"{
    "byteorder": {
        "Hash": [
            {"text": "impl Hash for BigEndian", "synthetic": false, "types": []},
            {"text": "impl Hash for LittleEndian", "synthetic": false, "types": []}
        ]
    },
    "syn": {
        "Hash": [
            {"text": "impl Hash for Member", "synthetic": false, "types": []},
            {"text": "impl Hash for Index", "synthetic": false, "types": []},
            {"text": "impl Hash for Lifetime", "synthetic": false, "types": []}
        ]
    }
}"#;
