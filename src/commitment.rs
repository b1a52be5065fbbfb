//! Commitment codec
//!
//! A commitment is the SHA-512 digest of a canonical `left|payload...|right`
//! string. Publishing the digest before the result lets anyone check later
//! that the revealed string was not changed.

use crate::errors::FairnessError;
use sha2::{Digest, Sha512};
use std::fmt::Display;

/// Field separator of the canonical form
pub const SEPARATOR: char = '|';

/// Canonical string together with its digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    pub canonical: String,
    pub digest: String,
}

/// Canonical string split back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCommitment<'a> {
    pub left_seed: &'a str,
    pub payload: Vec<&'a str>,
    pub right_seed: &'a str,
    pub digest: String,
}

/// Build the canonical string and its digest.
///
/// Payload fields must not contain the separator.
pub fn encode<T: Display>(left_seed: &str, payload: &[T], right_seed: &str) -> Commitment {
    let mut canonical =
        String::with_capacity(left_seed.len() + right_seed.len() + payload.len() * 8);
    canonical.push_str(left_seed);
    for field in payload {
        canonical.push(SEPARATOR);
        canonical.push_str(&field.to_string());
    }
    canonical.push(SEPARATOR);
    canonical.push_str(right_seed);

    let digest = digest(&canonical);
    Commitment { canonical, digest }
}

/// Split a canonical string into seeds and payload.
///
/// `expected_fields` counts both seeds; any other count is rejected.
pub fn decode(
    canonical: &str,
    expected_fields: usize,
) -> Result<DecodedCommitment<'_>, FairnessError> {
    let mut fields: Vec<&str> = canonical.split(SEPARATOR).collect();
    if expected_fields < 2 || fields.len() != expected_fields {
        return Err(FairnessError::MalformedCommitment(format!(
            "expected {} fields, found {}",
            expected_fields,
            fields.len()
        )));
    }

    let right_seed = fields.pop().unwrap_or_default();
    let left_seed = fields.remove(0);

    Ok(DecodedCommitment {
        left_seed,
        payload: fields,
        right_seed,
        digest: digest(canonical),
    })
}

/// Lowercase hex SHA-512 of the canonical string bytes
pub fn digest(canonical: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a revealed canonical string against a published digest
pub fn verify(canonical: &str, expected_digest: &str) -> bool {
    digest(canonical).eq_ignore_ascii_case(expected_digest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICE: &str =
        "6bdp5eu5rtbwr87dnlxlpa2yj00598zlahnj|914655|fb79o8tqteia8s4on98imrrslpfpun7c9q31";
    const DICE_HASH: &str = "54504a11f613b1ec748e41e7efb5aefc37cb951676c6e5db576a308d5067f806b4a4a712148878c1c6fe20c056275a439f7ce8e10aa01a915bb1c665f5776ce6";

    #[test]
    fn test_encode_layout() {
        let commitment = encode("aaa", &[1u8, 2, 3], "bbb");
        assert_eq!(commitment.canonical, "aaa|1|2|3|bbb");
        assert_eq!(commitment.digest.len(), 128);
        assert!(commitment
            .digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_reference_digest() {
        let commitment = encode(
            "6bdp5eu5rtbwr87dnlxlpa2yj00598zlahnj",
            &[914655u64],
            "fb79o8tqteia8s4on98imrrslpfpun7c9q31",
        );
        assert_eq!(commitment.canonical, DICE);
        assert_eq!(commitment.digest, DICE_HASH);
    }

    #[test]
    fn test_decode_parts() {
        let decoded = decode(DICE, 3).unwrap();
        assert_eq!(decoded.left_seed, "6bdp5eu5rtbwr87dnlxlpa2yj00598zlahnj");
        assert_eq!(decoded.payload, vec!["914655"]);
        assert_eq!(decoded.right_seed, "fb79o8tqteia8s4on98imrrslpfpun7c9q31");
        assert_eq!(decoded.digest, DICE_HASH);
    }

    #[test]
    fn test_decode_rejects_field_count() {
        assert!(matches!(decode(DICE, 4), Err(FairnessError::MalformedCommitment(_))));
        assert!(matches!(decode("a|1|2|b|", 4), Err(FairnessError::MalformedCommitment(_))));
        assert!(matches!(decode("a|b", 2), Ok(_)));
        assert!(decode("", 1).is_err());
    }

    #[test]
    fn test_verify_detects_tampering() {
        assert!(verify(DICE, DICE_HASH));
        assert!(verify(DICE, &DICE_HASH.to_uppercase()));

        let tampered = DICE.replace("914655", "914656");
        assert!(!verify(&tampered, DICE_HASH));
    }
}
