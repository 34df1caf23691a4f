//! Random numbers, identifiers, strings and throwaway hashes.
//!
//! Everything draws from the thread-local RNG in `rand`, which is
//! cryptographically secure and seeded from the OS.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::hashes::{HashAlgorithm, hash};

const DIGITS: &[u8] = b"0123456789";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const LETTERS_AND_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const LETTERS_AND_SPECIALS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz:;~=+%^*()[]{}/!@#$?";
const LETTERS_DIGITS_AND_SPECIALS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789:;~=+%^*()[]{}/!@#$?";

/// Character set for [`random_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharSet {
    Digits,
    Lowercase,
    Uppercase,
    #[default]
    Letters,
    LettersAndDigits,
    LettersAndSpecials,
    LettersDigitsAndSpecials,
}

impl CharSet {
    /// The ASCII characters this set draws from.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Digits => DIGITS,
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Letters => LETTERS,
            Self::LettersAndDigits => LETTERS_AND_DIGITS,
            Self::LettersAndSpecials => LETTERS_AND_SPECIALS,
            Self::LettersDigitsAndSpecials => LETTERS_DIGITS_AND_SPECIALS,
        }
    }
}

/// Digest of the current nanosecond timestamp mixed with 64 random bits.
pub fn random_hash(algorithm: HashAlgorithm) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let salt: u64 = rand::rng().random();
    hash(algorithm, &format!("{nanos}{salt}"))
}

/// [`random_hash`] with MD5.
pub fn random_md5() -> String {
    random_hash(HashAlgorithm::Md5)
}

/// [`random_hash`] with SHA-1.
pub fn random_sha1() -> String {
    random_hash(HashAlgorithm::Sha1)
}

/// [`random_hash`] with SHA-256.
pub fn random_sha256() -> String {
    random_hash(HashAlgorithm::Sha256)
}

/// [`random_hash`] with SHA-512.
pub fn random_sha512() -> String {
    random_hash(HashAlgorithm::Sha512)
}

/// Random integer in `[min, max]`. Bounds given in reverse order are swapped.
pub fn random_int(min: i64, max: i64) -> i64 {
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    rand::rng().random_range(low..=high)
}

/// A random (v4) UUID in hyphenated lowercase form.
pub fn random_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// `length` characters drawn uniformly from `charset`.
pub fn random_string(length: usize, charset: CharSet) -> String {
    let alphabet = charset.alphabet();
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// A numeric code of `length` digits, e.g. for one-time passwords.
///
/// Leading zeros are kept, so the code is a string rather than a number.
pub fn random_code(length: usize) -> String {
    random_string(length, CharSet::Digits)
}
