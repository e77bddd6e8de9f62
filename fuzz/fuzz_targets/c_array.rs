#![no_main]

use forth_minify::{CArray, emit::parse_declared_size};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let rendered = CArray::new("fuzz_gen_str", data.to_vec()).render();

    // The initializer body is a valid JSON array of integers once bracketed.
    let body = rendered
        .split_once('{')
        .and_then(|(_, rest)| rest.split_once('}'))
        .map(|(body, _)| body)
        .expect("rendered array must have a braced initializer");
    let values: Vec<u8> = serde_json::from_str(&format!("[{body}]"))
        .expect("initializer must list byte values");

    assert_eq!(values, data);
    assert_eq!(parse_declared_size(&rendered), Some(data.len()));
});
