#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut tree = routetrie::Tree::new();

    for (pattern, item) in data.0 {
        if tree.insert(pattern, item).is_err() {
            return;
        }
    }

    if let Some(matched) = tree.at(&data.1) {
        assert!(matched.params.iter().all(|(_, value)| !value.is_empty()));
    }
    let _ = tree.to_string();
});
