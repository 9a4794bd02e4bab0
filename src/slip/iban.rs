//! IBAN normalization and checks for QR-bill accounts.

use super::error::SlipError;
use crate::core::countries::is_qr_bill_account_country;

/// Strip spaces and upper-case.
pub fn normalize_iban(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate an IBAN for use on a Swiss QR-bill and return it normalized.
///
/// The account must be a 21-character CH or LI IBAN with a valid ISO 13616
/// mod-97 checksum.
pub fn validate_iban(iban: &str) -> Result<String, SlipError> {
    let normalized = normalize_iban(iban);
    let invalid = |reason: &str| SlipError::InvalidIban {
        iban: iban.to_string(),
        reason: reason.to_string(),
    };

    if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("contains characters other than letters and digits"));
    }
    if normalized.len() < 5 {
        return Err(invalid("too short"));
    }
    if !is_qr_bill_account_country(&normalized[..2]) {
        return Err(invalid("QR-bills require a CH or LI account"));
    }
    if normalized.len() != 21 {
        return Err(invalid("CH/LI IBANs have 21 characters"));
    }
    if mod97(&normalized) != 1 {
        return Err(invalid("checksum mismatch"));
    }
    Ok(normalized)
}

/// A QR-IBAN carries an institution id in the 30000–31999 range and only
/// accepts QR references.
pub fn is_qr_iban(iban: &str) -> bool {
    let normalized = normalize_iban(iban);
    normalized
        .get(4..9)
        .and_then(|iid| iid.parse::<u32>().ok())
        .is_some_and(|iid| (30000..=31999).contains(&iid))
}

/// Groups of four, as printed on the slip.
pub fn format_iban(iban: &str) -> String {
    let normalized = normalize_iban(iban);
    normalized
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// ISO 7064 mod 97-10 over an IBAN-shaped string (first four characters
/// moved to the end, letters expanded to 10–35).
pub(crate) fn mod97(value: &str) -> u32 {
    let rearranged = value[4..].chars().chain(value[..4].chars());
    let mut remainder: u32 = 0;
    for c in rearranged {
        let Some(digit) = c.to_digit(36) else {
            return 0;
        };
        if digit >= 10 {
            remainder = (remainder * 100 + digit) % 97;
        } else {
            remainder = (remainder * 10 + digit) % 97;
        }
    }
    remainder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_and_qr_iban() {
        assert_eq!(
            validate_iban("CH93 0076 2011 6238 5295 7").unwrap(),
            "CH9300762011623852957"
        );
        assert!(validate_iban("CH4431999123000889012").is_ok());
    }

    #[test]
    fn rejects_bad_checksum() {
        let err = validate_iban("CH4431999123000889013").unwrap_err();
        assert!(matches!(err, SlipError::InvalidIban { .. }));
    }

    #[test]
    fn rejects_foreign_accounts() {
        assert!(validate_iban("DE89370400440532013000").is_err());
    }

    #[test]
    fn detects_qr_iban() {
        assert!(is_qr_iban("CH44 3199 9123 0008 8901 2"));
        assert!(!is_qr_iban("CH9300762011623852957"));
        assert!(!is_qr_iban("CH"));
    }

    #[test]
    fn formats_in_groups_of_four() {
        assert_eq!(format_iban("CH4431999123000889012"), "CH44 3199 9123 0008 8901 2");
    }
}
