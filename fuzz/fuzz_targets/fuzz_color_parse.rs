#![no_main]

use libfuzzer_sys::fuzz_target;
use qrfaktura::theme::{Rgb, resolve_text_color};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed colors are errors, never panics.
        if let Ok(color) = Rgb::from_hex(s) {
            assert_eq!(Rgb::from_hex(&color.to_hex()).ok(), Some(color));
            let _ = resolve_text_color(color, Rgb::BLACK, Rgb::WHITE);
        }
    }
});
