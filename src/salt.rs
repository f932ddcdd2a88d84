//! Cryptographically secure salt generation.

use getrandom::fill;

use crate::error::{Error, Result};

/// Largest salt byte count a salt may be inlined at before the generator
/// switches to a heap allocation.
pub const INLINE_SALT_LEN: usize = 255;

/// Smallest salt we will generate.
pub const MIN_SALT_LEN: u32 = 1;
/// Largest salt we will generate.
pub const MAX_SALT_LEN: u32 = 65536;

/// An owned salt.
///
/// Common sizes live in a fixed inline array; anything above
/// [`INLINE_SALT_LEN`] bytes is heap-allocated for exactly the requested
/// length. Either way the buffer is owned by this value and released once
/// when it is dropped.
pub enum SaltBuffer {
    Inline { buf: [u8; INLINE_SALT_LEN], len: usize },
    Heap(Vec<u8>),
}

impl SaltBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            SaltBuffer::Inline { buf, len } => &buf[..*len],
            SaltBuffer::Heap(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AsRef<[u8]> for SaltBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| Error::RandomSource)
}

/// Generates `byte_count` cryptographically secure random bytes.
///
/// `byte_count` must be in `[MIN_SALT_LEN, MAX_SALT_LEN]`; anything else
/// fails with [`Error::OutOfRange`] before any allocation. A failed heap
/// allocation is [`Error::OutOfMemory`], and a CSPRNG failure is
/// [`Error::RandomSource`]; neither ever yields a partially filled salt.
pub fn generate_salt(byte_count: u32) -> Result<SaltBuffer> {
    if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&byte_count) {
        return Err(Error::OutOfRange {
            what: "salt byte count",
            min: MIN_SALT_LEN,
            max: MAX_SALT_LEN,
            got: byte_count,
        });
    }

    let count = byte_count as usize;
    if count <= INLINE_SALT_LEN {
        let mut buf = [0u8; INLINE_SALT_LEN];
        secure_random(&mut buf[..count])?;
        Ok(SaltBuffer::Inline { buf, len: count })
    } else {
        let mut v = Vec::new();
        v.try_reserve_exact(count).map_err(|_| Error::OutOfMemory)?;
        v.resize(count, 0);
        secure_random(&mut v)?;
        Ok(SaltBuffer::Heap(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exact_length() {
        for count in [1u32, 16, 255, 256, 4096, 65536] {
            let salt = generate_salt(count).unwrap();
            assert_eq!(salt.len(), count as usize);
        }
    }

    #[test]
    fn small_counts_stay_inline() {
        assert!(matches!(
            generate_salt(255).unwrap(),
            SaltBuffer::Inline { .. }
        ));
        assert!(matches!(generate_salt(256).unwrap(), SaltBuffer::Heap(_)));
    }

    #[test]
    fn zero_count_fails() {
        assert!(matches!(
            generate_salt(0),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn oversized_count_fails() {
        assert!(matches!(
            generate_salt(MAX_SALT_LEN + 1),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn salts_are_not_constant() {
        // 16 random bytes colliding twice is vanishingly unlikely
        let a = generate_salt(16).unwrap();
        let b = generate_salt(16).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }
}
