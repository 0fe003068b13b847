//! Elliptic-curve keys and signatures for authenticating peers in a
//! peer-to-peer messaging overlay
//!
//! Keys are generated at a symbolic *security level* which selects a curve,
//! trading key and signature size against conjectured strength:
//!
//!  - `very-low`: sect163k1,  42 byte signatures
//!  - `low`:      sect233k1,  60 byte signatures
//!  - `medium`:   sect409k1, 104 byte signatures
//!  - `high`:     sect571r1, 144 byte signatures
//!
//! Besides these presets, every curve in an explicit table of named curves
//! is available; see [`SecurityLevel::all`]. Curves below 160 bits are
//! refused at generation time since they cannot sign a full SHA-1 class
//! digest.
//!
//! # Wire formats
//!
//! All binary forms are stable and shared with other nodes:
//!
//!  - signatures are `r || s`, each component big-endian unsigned and
//!    left-zero-padded to the byte size of the curve; no framing, no
//!    algorithm tag; the curve is known from the signer's key
//!  - private keys are SEC1 `ECPrivateKey` DER, public keys are
//!    SubjectPublicKeyInfo DER; both equal the body bytes of the
//!    corresponding PEM container, which is also offered for import/export
//!
//! This layer signs exactly the digest it is given; hashing is the caller's
//! business. Curve arithmetic is delegated to OpenSSL.
//!
//! All operations are synchronous and free of shared mutable state; key
//! generation draws from OpenSSL's process-wide CSPRNG.

mod error;
mod level;
mod pair;
mod provider;
mod public;
mod signature;

pub use error::{Error, Result};
pub use level::{SecurityLevel, MIN_CURVE_BITS};
pub use pair::KeyPair;
pub use provider::{Crypto, EcCrypto};
pub use public::PublicKey;
