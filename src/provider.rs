use crate::{error::Result, level::SecurityLevel, pair::KeyPair, public::PublicKey};
use zeroize::Zeroizing;

/// Capability interface of a signing backend
///
/// The networking and protocol layers consume keys and signatures only
/// through this surface, so alternative backends can be slotted in without
/// touching them. [`EcCrypto`] is the only backend currently implemented.
pub trait Crypto {
    type KeyPair;
    type PublicKey;

    /// Names of all levels keys can be generated at.
    fn security_levels(&self) -> Vec<SecurityLevel>;

    /// Generate a fresh random key pair at the given level.
    fn generate_key(&self, level: &SecurityLevel) -> Result<Self::KeyPair>;

    fn key_to_private_bin(&self, key: &Self::KeyPair) -> Result<Zeroizing<Vec<u8>>>;
    fn key_from_private_bin(&self, bytes: &[u8]) -> Result<Self::KeyPair>;
    fn key_to_public_bin(&self, key: &Self::PublicKey) -> Vec<u8>;
    fn key_from_public_bin(&self, bytes: &[u8]) -> Result<Self::PublicKey>;

    /// `true` iff `bytes` decode as a private key. Never fails otherwise.
    fn is_valid_private_bin(&self, bytes: &[u8]) -> bool {
        self.key_from_private_bin(bytes).is_ok()
    }

    /// `true` iff `bytes` decode as a public key. Never fails otherwise.
    fn is_valid_public_bin(&self, bytes: &[u8]) -> bool {
        self.key_from_public_bin(bytes).is_ok()
    }

    /// Length in bytes of every signature made with `key`.
    fn signature_length(&self, key: &Self::KeyPair) -> usize;

    /// Sign a pre-hashed digest.
    fn sign(&self, key: &Self::KeyPair, digest: &[u8]) -> Result<Vec<u8>>;

    /// Check a signature; all failures are a `false` result.
    fn verify(&self, key: &Self::PublicKey, digest: &[u8], signature: &[u8]) -> bool;
}

/// The elliptic-curve backend, a stateless façade over [`KeyPair`] and
/// [`PublicKey`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EcCrypto;

impl Crypto for EcCrypto {
    type KeyPair = KeyPair;
    type PublicKey = PublicKey;

    fn security_levels(&self) -> Vec<SecurityLevel> {
        SecurityLevel::all()
    }

    fn generate_key(&self, level: &SecurityLevel) -> Result<KeyPair> {
        KeyPair::generate(level)
    }

    fn key_to_private_bin(&self, key: &KeyPair) -> Result<Zeroizing<Vec<u8>>> {
        key.to_bytes()
    }

    fn key_from_private_bin(&self, bytes: &[u8]) -> Result<KeyPair> {
        KeyPair::from_bytes(bytes)
    }

    fn key_to_public_bin(&self, key: &PublicKey) -> Vec<u8> {
        key.to_bytes()
    }

    fn key_from_public_bin(&self, bytes: &[u8]) -> Result<PublicKey> {
        PublicKey::from_bytes(bytes)
    }

    fn signature_length(&self, key: &KeyPair) -> usize {
        key.signature_length()
    }

    fn sign(&self, key: &KeyPair, digest: &[u8]) -> Result<Vec<u8>> {
        key.sign(digest)
    }

    fn verify(&self, key: &PublicKey, digest: &[u8], signature: &[u8]) -> bool {
        key.verify(digest, signature)
    }
}
