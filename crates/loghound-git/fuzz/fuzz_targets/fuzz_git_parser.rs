#![no_main]

use libfuzzer_sys::fuzz_target;
use loghound_git::decode_log_output;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    let commits = decode_log_output(&output, None);
    for commit in &commits {
        assert!(!(commit.tag().is_some() && !commit.refs().is_empty()));
    }
});
