#![no_main]
use libfuzzer_sys::fuzz_target;
use linetable::{Delimiter, Options, read_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for delimiter in [Delimiter::Comma, Delimiter::Tab] {
            let opts = Options { delimiter, has_header: false };
            let table = read_str(s, &opts).expect("positional names never fail");
            assert_eq!(table.len(), linetable::split_lines(s).count());
            let _ = read_str(s, &Options { delimiter, has_header: true });
        }
    }
});
