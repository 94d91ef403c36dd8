//! Simulated documentation page bootstrap.
//!
//! Plays out the load-order race the registry exists to resolve: one
//! fragment executes before the page bootstrap, two more after, and the
//! final listing shows all of them in merge order.
//!
//! Run with: cargo run --example doc_page

use traitdex::bootstrap::FragmentReceiver;
use traitdex::registry::ImplementorRegistry;

const EARLY_FRAGMENT: &str = r#"{
    "num_bigint": {
        "Hash": [
            {"text": "impl Hash for Sign", "synthetic": false, "types": []},
            {"text": "impl Hash for BigInt", "synthetic": false, "types": []},
            {"text": "impl Hash for BigUint", "synthetic": false, "types": []}
        ]
    }
}"#;

const LATE_FRAGMENT: &str = r#"{
    "byteorder": {
        "Hash": [
            {"text": "impl Hash for BigEndian", "synthetic": false, "types": []},
            {"text": "impl Hash for LittleEndian", "synthetic": false, "types": []}
        ]
    },
    "ggbc_parser": {
        "Hash": [
            {"text": "impl Hash for Span", "synthetic": false, "types": []}
        ]
    }
}"#;

const MALFORMED_FRAGMENT: &str = r#"{"broken_crate": ["not", "a", "trait", "map"]}"#;

fn main() {
    traitdex::telemetry::init();

    let registry = ImplementorRegistry::new();
    let receiver = FragmentReceiver::new(registry.clone());

    // A fragment script beats the page bootstrap to execution.
    let outcome = receiver.deliver_json(EARLY_FRAGMENT);
    println!("before initialize: delivery parked = {}", outcome.is_parked());
    println!("before initialize: query(\"Hash\") -> {} entries", registry.query("Hash").len());

    // Page bootstrap completes; the parked fragment drains into the index.
    registry.initialize();

    // Remaining fragments merge as they arrive. A malformed one is dropped
    // without disturbing the rest.
    receiver.deliver_json(LATE_FRAGMENT);
    receiver.deliver_json(MALFORMED_FRAGMENT);

    let snapshot = registry.snapshot();
    println!("\nimplementor index (revision {}):", snapshot.revision);
    for trait_id in registry.traits() {
        println!("  {trait_id}");
        for implementor in snapshot.get(&trait_id) {
            println!("    - {implementor}");
        }
    }
}
