//! Drive the full delivery protocol with arbitrary fragments around the
//! ready transition; the registry must stay consistent and never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use traitdex::bootstrap::FragmentReceiver;
use traitdex::registry::ImplementorRegistry;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let registry = ImplementorRegistry::new();
    let receiver = FragmentReceiver::new(registry.clone());

    let _ = receiver.deliver_json(raw);
    registry.initialize();
    let _ = receiver.deliver_json(raw);
    registry.initialize();

    for trait_id in registry.traits() {
        let _ = registry.query(&trait_id);
    }
    let _ = registry.snapshot();
});
