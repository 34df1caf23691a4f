//! Hex-encoded digests and bcrypt password hashing.
//!
//! Every digest takes the UTF-8 bytes of its input and returns lowercase
//! hex. Fixed-size digests are also reachable through [`HashAlgorithm`] and
//! [`hash`].

use blake2::digest::consts::U32;
use blake2::{Blake2b, Blake2b512, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::error::Result;

type Blake2b256 = Blake2b<U32>;

/// Fixed-size digest algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b512,
    Blake2s256,
}

impl HashAlgorithm {
    /// Length of the hex digest in characters.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha3_224 => 56,
            Self::Sha256 | Self::Sha3_256 | Self::Blake2b256 | Self::Blake2s256 => 64,
            Self::Sha3_384 => 96,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => 128,
        }
    }
}

fn hex_digest<D: Digest>(text: &str) -> String {
    hex::encode(D::digest(text.as_bytes()))
}

/// Hex digest of `text` under `algorithm`.
///
/// ```
/// use helpers::{hash, HashAlgorithm};
///
/// assert_eq!(hash(HashAlgorithm::Md5, "hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
pub fn hash(algorithm: HashAlgorithm, text: &str) -> String {
    match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(text),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(text),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(text),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(text),
        HashAlgorithm::Sha3_224 => hex_digest::<Sha3_224>(text),
        HashAlgorithm::Sha3_256 => hex_digest::<Sha3_256>(text),
        HashAlgorithm::Sha3_384 => hex_digest::<Sha3_384>(text),
        HashAlgorithm::Sha3_512 => hex_digest::<Sha3_512>(text),
        HashAlgorithm::Blake2b256 => hex_digest::<Blake2b256>(text),
        HashAlgorithm::Blake2b512 => hex_digest::<Blake2b512>(text),
        HashAlgorithm::Blake2s256 => hex_digest::<Blake2s256>(text),
    }
}

/// MD5 digest, 32 hex chars.
pub fn md5(text: &str) -> String {
    hash(HashAlgorithm::Md5, text)
}

/// SHA-1 digest, 40 hex chars.
pub fn sha1(text: &str) -> String {
    hash(HashAlgorithm::Sha1, text)
}

/// SHA-256 digest, 64 hex chars.
pub fn sha256(text: &str) -> String {
    hash(HashAlgorithm::Sha256, text)
}

/// SHA-512 digest, 128 hex chars.
pub fn sha512(text: &str) -> String {
    hash(HashAlgorithm::Sha512, text)
}

/// SHA3-224 digest, 56 hex chars.
pub fn sha3_224(text: &str) -> String {
    hash(HashAlgorithm::Sha3_224, text)
}

/// SHA3-256 digest, 64 hex chars.
pub fn sha3_256(text: &str) -> String {
    hash(HashAlgorithm::Sha3_256, text)
}

/// SHA3-384 digest, 96 hex chars.
pub fn sha3_384(text: &str) -> String {
    hash(HashAlgorithm::Sha3_384, text)
}

/// SHA3-512 digest, 128 hex chars.
pub fn sha3_512(text: &str) -> String {
    hash(HashAlgorithm::Sha3_512, text)
}

/// BLAKE2b with a 256-bit output, 64 hex chars.
pub fn blake2b_256(text: &str) -> String {
    hash(HashAlgorithm::Blake2b256, text)
}

/// BLAKE2b-512 digest, 128 hex chars.
pub fn blake2b_512(text: &str) -> String {
    hash(HashAlgorithm::Blake2b512, text)
}

/// BLAKE2s-256 digest, 64 hex chars.
pub fn blake2s_256(text: &str) -> String {
    hash(HashAlgorithm::Blake2s256, text)
}

fn xof_hex<X>(text: &str, output_len: usize) -> String
where
    X: Default + sha3::digest::Update + sha3::digest::ExtendableOutput,
{
    use sha3::digest::XofReader;

    if output_len == 0 {
        return String::new();
    }
    let mut hasher = X::default();
    hasher.update(text.as_bytes());
    let mut out = vec![0u8; output_len];
    hasher.finalize_xof().read(&mut out);
    hex::encode(out)
}

/// SHAKE128 output of `output_len` bytes, hex encoded (`2 * output_len` chars).
pub fn shake128(text: &str, output_len: usize) -> String {
    xof_hex::<Shake128>(text, output_len)
}

/// SHAKE256 output of `output_len` bytes, hex encoded (`2 * output_len` chars).
pub fn shake256(text: &str, output_len: usize) -> String {
    xof_hex::<Shake256>(text, output_len)
}

/// Hash a password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

/// Hash a password with bcrypt at an explicit cost (4..=31).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Whether `password` matches the bcrypt `hash`.
///
/// A malformed hash counts as a mismatch.
pub fn check_password_hash(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::debug!("Password hash check failed: {e}");
            false
        }
    }
}
