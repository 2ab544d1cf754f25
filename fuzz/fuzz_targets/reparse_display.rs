#![no_main]
use libfuzzer_sys::fuzz_target;
use name_parser::Name;

// Whatever we render must itself be a parseable name
fuzz_target!(|data: &str| {
    if let Ok(name) = Name::parse(data) {
        let rendered = name.to_string();
        assert!(Name::parse(&rendered).is_ok(), "{:?} rendered as {:?}", data, rendered);
    }
});
