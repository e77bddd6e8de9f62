#![no_main]

use forth_minify::{MinifyConfig, MinifyError, minify, reduce::reduce};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep the fuzzer fast.
    let data = if data.len() > 64 * 1024 {
        &data[..64 * 1024]
    } else {
        data
    };

    let source = String::from_utf8_lossy(data);

    // Exercise every comment mode. Unterminated comments are expected outcomes and must never
    // crash.
    for nested_comments in [false, true] {
        for quote_aware_comments in [false, true] {
            let cfg = MinifyConfig {
                nested_comments,
                quote_aware_comments,
                trim_definitions: false,
            };

            match reduce(&source, &cfg) {
                Ok(reduced) => {
                    assert!(!reduced.contains('\n'), "line feed survived reduction");

                    let out = minify(&source, &cfg).expect("reduce succeeded, minify must too");
                    assert!(out.starts_with(':'), "output must start with a separator");
                }
                Err(MinifyError::MalformedComment { offset }) => {
                    assert!(offset < source.chars().count());
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }
});
