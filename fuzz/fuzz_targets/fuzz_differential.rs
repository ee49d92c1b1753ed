#![no_main]
use libfuzzer_sys::fuzz_target;
use linetable::{IndexHeader, Splitter, read_table_par, read_table_with};

fuzz_target!(|lines: Vec<String>| {
    let splitter = Splitter::comma();
    let sequential = read_table_with(&lines, &IndexHeader, &splitter);
    let parallel = read_table_par(&lines, &IndexHeader, &splitter);
    match (sequential, parallel) {
        (Ok(a), Ok(b)) => {
            if a != b {
                panic!("Differential fuzzing: tables differ for {:?}", lines);
            }
        }
        _ => panic!("Differential fuzzing: positional read failed for {:?}", lines),
    }
});
