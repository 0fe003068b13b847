use crate::{
    error::{Error, Result},
    level::curve_bits,
    signature,
};
use openssl::{
    ec::EcKey,
    ecdsa::EcdsaSig,
    pkey::Public,
};
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
};

/// The public half of a key pair, which also serves as a peer identifier
///
/// The canonical binary form is the SubjectPublicKeyInfo DER encoding, the
/// same bytes other nodes store and transmit (equal to the body of a
/// `-----BEGIN PUBLIC KEY-----` container). That encoding is computed once
/// at construction and backs equality, ordering and the textual form, which
/// is simply its base64.
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) inner: EcKey<Public>,
    der: Vec<u8>,
    bits: u32,
}

impl PublicKey {
    pub(crate) fn from_eckey(inner: EcKey<Public>) -> Result<Self> {
        let der = inner.public_key_to_der()?;
        let bits = curve_bits(inner.group());
        Ok(Self { inner, der, bits })
    }

    /// Reconstruct a public key from its binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = EcKey::public_key_from_der(bytes)
            .map_err(|err| Error::InvalidKeyEncoding(err.to_string()))?;
        inner
            .check_key()
            .map_err(|err| Error::InvalidKeyEncoding(err.to_string()))?;
        Self::from_eckey(inner)
    }

    /// The canonical binary form.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.der.clone()
    }

    /// Import from the textual container format.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let inner = EcKey::public_key_from_pem(pem.as_bytes())
            .map_err(|err| Error::InvalidKeyEncoding(err.to_string()))?;
        inner
            .check_key()
            .map_err(|err| Error::InvalidKeyEncoding(err.to_string()))?;
        Self::from_eckey(inner)
    }

    /// Export as the textual container format.
    pub fn to_pem(&self) -> Result<String> {
        let pem = self.inner.public_key_to_pem()?;
        String::from_utf8(pem).map_err(|err| Error::InvalidKeyEncoding(err.to_string()))
    }

    /// Bit size of the curve (its field degree); key and signature sizes
    /// follow from it.
    pub fn key_size_bits(&self) -> u32 {
        self.bits
    }

    /// Length in bytes of every signature verifiable by this key.
    pub fn signature_length(&self) -> usize {
        2 * signature::component_length(self.bits)
    }

    /// Short name of the underlying curve, if the primitive knows one.
    pub fn curve_name(&self) -> Option<&'static str> {
        self.inner
            .group()
            .curve_name()
            .and_then(|nid| nid.short_name().ok())
    }

    /// Check `signature` over `digest` against this key.
    ///
    /// The signature must be in the canonical fixed-length form produced by
    /// [`crate::KeyPair::sign`]. A wrong length, malformed
    /// components, or a primitive rejection is a `false` result, never an
    /// error.
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> bool {
        let length = signature::component_length(self.bits);
        let (mpi_r, mpi_s) = match signature::unpack(signature, length) {
            Some(components) => components,
            None => return false,
        };
        let (r, s) = match (signature::mpi_decode(&mpi_r), signature::mpi_decode(&mpi_s)) {
            (Some(r), Some(s)) => (r, s),
            _ => return false,
        };
        EcdsaSig::from_private_components(r, s)
            .and_then(|sig| sig.verify(digest, &self.inner))
            .unwrap_or(false)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base64::encode(&self.der))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve_name().unwrap_or("?"))
            .field("key", &self.to_string())
            .finish()
    }
}

impl std::str::FromStr for PublicKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let der = base64::decode(s)
            .map_err(|err| Error::InvalidKeyEncoding(format!("base64: {}", err)))?;
        Self::from_bytes(&der)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.der
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}
impl Eq for PublicKey {}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.der.cmp(&other.der)
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.der.hash(state);
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = PublicKey;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("PublicKey")
            }
            fn visit_str<E: serde::de::Error>(self, string: &str) -> std::result::Result<Self::Value, E> {
                use std::str::FromStr;
                PublicKey::from_str(string).map_err(serde::de::Error::custom)
            }
        }
        deserializer.deserialize_str(V)
    }
}

#[cfg(test)]
mod tests {
    use super::PublicKey;
    use crate::{KeyPair, SecurityLevel};
    use std::str::FromStr;

    #[test]
    fn str_roundtrip() {
        let public = KeyPair::generate(&SecurityLevel::VeryLow).unwrap().public();
        let str = format!("{}", public);
        let round_tripped = PublicKey::from_str(&str).unwrap();
        assert_eq!(public, round_tripped);
    }

    #[test]
    fn serde_roundtrip() {
        let public = KeyPair::generate(&SecurityLevel::Low).unwrap().public();
        let bytes = serde_cbor::to_vec(&public).unwrap();
        let round_tripped: PublicKey = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(public, round_tripped);
    }

    #[test]
    fn pem_roundtrip() {
        let public = KeyPair::generate(&SecurityLevel::VeryLow).unwrap().public();
        let pem = public.to_pem().unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
        assert_eq!(PublicKey::from_pem(&pem).unwrap(), public);
    }

    #[test]
    fn binary_form_is_the_pem_body() {
        let public = KeyPair::generate(&SecurityLevel::Medium).unwrap().public();
        let pem = public.to_pem().unwrap();
        let body = pem
            .lines()
            .filter(|line| !line.starts_with("-----"))
            .collect::<String>();
        assert_eq!(base64::decode(body).unwrap(), public.to_bytes());
    }

    #[test]
    fn debug_names_the_curve() {
        let public = KeyPair::generate(&SecurityLevel::VeryLow).unwrap().public();
        assert!(format!("{:?}", public).contains("sect163k1"));
    }
}
