#![no_main]

use huff_codec::fuzz::{canonical, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| {
    canonical(data);
});
