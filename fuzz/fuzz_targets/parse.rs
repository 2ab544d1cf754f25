#![no_main]
use libfuzzer_sys::fuzz_target;
use name_parser::Name;

fuzz_target!(|data: &str| {
    let _ = Name::parse(data);
});
