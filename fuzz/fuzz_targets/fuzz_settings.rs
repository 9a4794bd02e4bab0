#![no_main]

use libfuzzer_sys::fuzz_target;
use qrfaktura::theme::{RenderSettings, Theme};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any accepted settings must resolve to a theme.
        if let Ok(settings) = RenderSettings::from_json(s) {
            let _ = Theme::from_settings(&settings);
        }
    }
});
