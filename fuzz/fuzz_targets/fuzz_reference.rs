#![no_main]

use libfuzzer_sys::fuzz_target;
use qrfaktura::slip::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = validate_iban(s);
        let _ = is_qr_iban(s);
        let _ = format_iban(s);
        if let Ok(qrr) = validate_qr_reference(s) {
            let _ = format_reference(&qrr, ReferenceType::Qrr);
        }
        if let Ok(scor) = validate_creditor_reference(s) {
            let _ = format_reference(&scor, ReferenceType::Scor);
        }
        let _ = format_reference(s, ReferenceType::Qrr);
        let _ = format_reference(s, ReferenceType::Scor);
    }
});
