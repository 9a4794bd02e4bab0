//! QR references (QRR) and ISO 11649 creditor references (SCOR).

use serde::{Deserialize, Serialize};

use super::error::SlipError;
use super::iban::mod97;

/// Reference type field of the Swiss Payments Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceType {
    /// 27-digit QR reference; only valid with a QR-IBAN.
    Qrr,
    /// ISO 11649 creditor reference ("RF…").
    Scor,
    /// No reference.
    Non,
}

impl ReferenceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Qrr => "QRR",
            Self::Scor => "SCOR",
            Self::Non => "NON",
        }
    }
}

const MOD10_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

fn compact(reference: &str) -> String {
    reference.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Recursive mod-10 check digit over a string of decimal digits.
/// Returns `None` for non-digit input.
pub fn qr_reference_check_digit(digits: &str) -> Option<u8> {
    let mut carry = 0u8;
    for c in digits.chars() {
        let d = c.to_digit(10)? as u8;
        carry = MOD10_TABLE[usize::from((carry + d) % 10)];
    }
    Some((10 - carry) % 10)
}

/// Validate a 27-digit QR reference and return it without spaces.
pub fn validate_qr_reference(reference: &str) -> Result<String, SlipError> {
    let compacted = compact(reference);
    let invalid = |reason: &str| SlipError::InvalidReference {
        reference: reference.to_string(),
        reason: reason.to_string(),
    };

    if compacted.len() != 27 || !compacted.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("a QR reference has exactly 27 digits"));
    }
    let (body, check) = compacted.split_at(26);
    let expected = qr_reference_check_digit(body).ok_or_else(|| invalid("not numeric"))?;
    if check != expected.to_string() {
        return Err(invalid("check digit mismatch"));
    }
    Ok(compacted)
}

/// Validate an ISO 11649 creditor reference ("RF" + 2 check digits + up to
/// 21 alphanumerics) and return it without spaces, upper-cased.
pub fn validate_creditor_reference(reference: &str) -> Result<String, SlipError> {
    let compacted = compact(reference).to_ascii_uppercase();
    let invalid = |reason: &str| SlipError::InvalidReference {
        reference: reference.to_string(),
        reason: reason.to_string(),
    };

    if !compacted.starts_with("RF") {
        return Err(invalid("a creditor reference starts with 'RF'"));
    }
    if !(5..=25).contains(&compacted.len()) {
        return Err(invalid("a creditor reference has 5 to 25 characters"));
    }
    if !compacted.chars().all(|c| c.is_ascii_alphanumeric())
        || !compacted[2..4].chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid("only letters and digits are allowed"));
    }
    if mod97(&compacted) != 1 {
        return Err(invalid("check digits mismatch"));
    }
    Ok(compacted)
}

/// Format a reference for print: QR references in blocks of five from the
/// right, creditor references in blocks of four from the left.
pub fn format_reference(reference: &str, kind: ReferenceType) -> String {
    let compacted = compact(reference);
    match kind {
        ReferenceType::Qrr => {
            let chars: Vec<char> = compacted.chars().collect();
            let head = chars.len() % 5;
            let mut groups: Vec<String> = Vec::new();
            if head > 0 {
                groups.push(chars[..head].iter().collect());
            }
            groups.extend(chars[head..].chunks(5).map(|c| c.iter().collect::<String>()));
            groups.join(" ")
        }
        ReferenceType::Scor => compacted
            .chars()
            .collect::<Vec<_>>()
            .chunks(4)
            .map(|c| c.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" "),
        ReferenceType::Non => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_of_known_reference() {
        assert_eq!(qr_reference_check_digit("21000000000313947143000901"), Some(7));
        assert_eq!(qr_reference_check_digit("00000000000000000000000123"), Some(6));
        assert_eq!(qr_reference_check_digit("12a"), None);
    }

    #[test]
    fn validates_qr_reference() {
        assert_eq!(
            validate_qr_reference("21 00000 00003 13947 14300 09017").unwrap(),
            "210000000003139471430009017"
        );
        assert!(validate_qr_reference("210000000003139471430009018").is_err());
        assert!(validate_qr_reference("2100000000031394714300090").is_err());
    }

    #[test]
    fn validates_creditor_reference() {
        assert_eq!(
            validate_creditor_reference("RF18 5390 0754 7034").unwrap(),
            "RF18539007547034"
        );
        assert!(validate_creditor_reference("RF18539007547035").is_err());
        assert!(validate_creditor_reference("XX18539007547034").is_err());
    }

    #[test]
    fn formats_for_print() {
        assert_eq!(
            format_reference("210000000003139471430009017", ReferenceType::Qrr),
            "21 00000 00003 13947 14300 09017"
        );
        assert_eq!(
            format_reference("RF18539007547034", ReferenceType::Scor),
            "RF18 5390 0754 7034"
        );
    }
}
