#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The level name matches neither a preset nor a known curve.
    #[error("unknown security level '{0}'")]
    UnknownSecurityLevel(String),
    /// The resolved curve is too small to sign a full digest.
    /// This is a configuration error, not a runtime condition.
    #[error("curve {curve} is {bits} bits, need at least 160")]
    InsecureCurve { curve: String, bits: u32 },
    /// Key bytes or text that the primitive refuses to load. The source
    /// should be treated as corrupt or untrusted.
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),
    /// The primitive library rejected an operation it should not have.
    #[error("crypto primitive failure: {0}")]
    Primitive(#[from] openssl::error::ErrorStack),
}

pub type Result<T> = std::result::Result<T, Error>;
