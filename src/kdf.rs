//! PBKDF2-HMAC key derivation with a caller-selected digest.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Largest digest output we derive keys for (sized for 512-bit digests).
pub const MAX_OUTPUT_SIZE: usize = 64;

/// A digest usable as the PBKDF2 pseudorandom function.
///
/// Resolved by exact, case-sensitive name match; there is no registry to
/// initialize, the set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Digest {
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "sha1" => Some(Digest::Sha1),
            "sha224" => Some(Digest::Sha224),
            "sha256" => Some(Digest::Sha256),
            "sha384" => Some(Digest::Sha384),
            "sha512" => Some(Digest::Sha512),
            _ => None,
        }
    }

    /// Native output size in bytes, which is also the derived key length.
    pub fn output_size(self) -> usize {
        match self {
            Digest::Sha1 => 20,
            Digest::Sha224 => 28,
            Digest::Sha256 => 32,
            Digest::Sha384 => 48,
            Digest::Sha512 => 64,
        }
    }
}

/// Derived key material, exactly one digest output long.
///
/// The backing storage is a fixed array so no allocation happens between
/// validation and derivation; the bytes are wiped on drop.
pub struct DerivedKey {
    buf: [u8; MAX_OUTPUT_SIZE],
    len: usize,
}

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// Derives key material with PBKDF2-HMAC.
///
/// `digest_name` must resolve in the registry ([`Error::UnknownDigest`])
/// and the resolved digest must fit [`MAX_OUTPUT_SIZE`]
/// ([`Error::UnsupportedDigest`]). Password and salt are opaque byte
/// strings; empty values are forwarded to the construction unchanged. The
/// output is always exactly the digest's native size.
pub fn derive_key(
    digest_name: &str,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey> {
    let digest =
        Digest::resolve(digest_name).ok_or_else(|| Error::UnknownDigest(digest_name.into()))?;

    let size = digest.output_size();
    if size > MAX_OUTPUT_SIZE {
        return Err(Error::UnsupportedDigest {
            name: digest_name.into(),
            size,
            max: MAX_OUTPUT_SIZE,
        });
    }

    // normally unreachable: the host decodes iterations through the strict
    // integer decoder, which rejects anything below 1
    if iterations == 0 {
        return Err(Error::DerivationFailed);
    }

    let mut key = DerivedKey {
        buf: [0u8; MAX_OUTPUT_SIZE],
        len: size,
    };
    let out = &mut key.buf[..size];

    match digest {
        Digest::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, iterations, out),
        Digest::Sha224 => pbkdf2_hmac::<Sha224>(password, salt, iterations, out),
        Digest::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, iterations, out),
        Digest::Sha384 => pbkdf2_hmac::<Sha384>(password, salt, iterations, out),
        Digest::Sha512 => pbkdf2_hmac::<Sha512>(password, salt, iterations, out),
    }

    Ok(key)
}
