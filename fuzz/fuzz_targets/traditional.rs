#![no_main]

use huff_codec::fuzz::{traditional, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| {
    traditional(data);
});
