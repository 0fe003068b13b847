use crate::error::{Error, Result};
use openssl::{ec::EcGroupRef, nid::Nid};
use std::fmt::{self, Display};

/// Minimum acceptable curve size in bits.
///
/// Anything smaller cannot sign a full SHA-1 class (160 bit) digest.
pub const MIN_CURVE_BITS: u32 = 160;

/// Every named curve available for key generation, besides the presets.
///
/// This table is the complete, explicit enumeration of what the primitive
/// library offers here; it is never extended at runtime. Curves below
/// [`MIN_CURVE_BITS`] are listed for completeness but refused by
/// [`crate::KeyPair::generate`].
const NAMED_CURVES: &[(&str, Nid)] = &[
    ("secp112r1", Nid::SECP112R1),
    ("secp128r1", Nid::SECP128R1),
    ("secp160k1", Nid::SECP160K1),
    ("secp160r1", Nid::SECP160R1),
    ("secp192k1", Nid::SECP192K1),
    ("prime192v1", Nid::X9_62_PRIME192V1),
    ("secp224k1", Nid::SECP224K1),
    ("secp224r1", Nid::SECP224R1),
    ("secp256k1", Nid::SECP256K1),
    ("prime256v1", Nid::X9_62_PRIME256V1),
    ("secp384r1", Nid::SECP384R1),
    ("secp521r1", Nid::SECP521R1),
    ("sect163k1", Nid::SECT163K1),
    ("sect163r2", Nid::SECT163R2),
    ("sect233k1", Nid::SECT233K1),
    ("sect233r1", Nid::SECT233R1),
    ("sect283k1", Nid::SECT283K1),
    ("sect283r1", Nid::SECT283R1),
    ("sect409k1", Nid::SECT409K1),
    ("sect409r1", Nid::SECT409R1),
    ("sect571k1", Nid::SECT571K1),
    ("sect571r1", Nid::SECT571R1),
    ("brainpoolP256r1", Nid::BRAINPOOL_P256R1),
    ("brainpoolP384r1", Nid::BRAINPOOL_P384R1),
    ("brainpoolP512r1", Nid::BRAINPOOL_P512R1),
];

/// A symbolic name selecting the curve for a fresh key.
///
/// The four presets are stable aliases that may be repointed to stronger
/// curves over time; a [`SecurityLevel::Named`] level pins a concrete curve
/// by its case-sensitive name.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum SecurityLevel {
    VeryLow,
    Low,
    Medium,
    High,
    Named(String),
}

impl SecurityLevel {
    /// Resolve this level to a concrete curve identifier.
    pub fn resolve(&self) -> Result<Nid> {
        match self {
            SecurityLevel::VeryLow => Ok(Nid::SECT163K1),
            SecurityLevel::Low => Ok(Nid::SECT233K1),
            SecurityLevel::Medium => Ok(Nid::SECT409K1),
            SecurityLevel::High => Ok(Nid::SECT571R1),
            SecurityLevel::Named(name) => NAMED_CURVES
                .iter()
                .find(|(curve, _)| curve == name)
                .map(|(_, nid)| *nid)
                .ok_or_else(|| Error::UnknownSecurityLevel(name.clone())),
        }
    }

    /// All recognized levels: the presets plus every named curve.
    pub fn all() -> Vec<SecurityLevel> {
        let presets = [
            SecurityLevel::VeryLow,
            SecurityLevel::Low,
            SecurityLevel::Medium,
            SecurityLevel::High,
        ];
        presets
            .into_iter()
            .chain(
                NAMED_CURVES
                    .iter()
                    .map(|(curve, _)| SecurityLevel::Named((*curve).to_string())),
            )
            .collect()
    }
}

impl Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityLevel::VeryLow => f.write_str("very-low"),
            SecurityLevel::Low => f.write_str("low"),
            SecurityLevel::Medium => f.write_str("medium"),
            SecurityLevel::High => f.write_str("high"),
            SecurityLevel::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for SecurityLevel {
    fn from(name: &str) -> Self {
        match name {
            "very-low" => SecurityLevel::VeryLow,
            "low" => SecurityLevel::Low,
            "medium" => SecurityLevel::Medium,
            "high" => SecurityLevel::High,
            other => SecurityLevel::Named(other.to_string()),
        }
    }
}

/// Bit size of `group`: the degree of its underlying field. Key and
/// signature sizes derive solely from this, and it is what the stored
/// formats were sized with. Not the same as the order's bit length on
/// curves with a cofactor (sect233k1 is a 233 bit curve whose subgroup
/// order has 232 bits).
pub(crate) fn curve_bits(group: &EcGroupRef) -> u32 {
    group.degree()
}
