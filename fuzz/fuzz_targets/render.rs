#![no_main]

use jpoet::{JavaFile, RenderConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any declaration file that loads must render or fail with an error
    if let Ok(file) = serde_json::from_slice::<JavaFile>(data) {
        let _ = file.render(&RenderConfig::default());
        let _ = file.render(&RenderConfig::default().with_line_length(10));
    }
});
