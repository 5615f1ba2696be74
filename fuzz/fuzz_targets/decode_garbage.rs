#![no_main]

use huff_codec::fuzz::{decode_garbage, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| {
    decode_garbage(data);
});
