//! Deterministic security and network primitives for a query-engine host.
//!
//! Provides PBKDF2-HMAC key derivation, secure salt generation, IPv6 CIDR
//! prefix computations, and the strict integer decoding they share.

mod error;
pub mod host;
mod inet6;
mod kdf;
mod salt;
mod uint;

pub use crate::error::{Error, Result};
pub use crate::host::{HostFunctions, Outcome, Udf};
pub use crate::inet6::{MAX_RENDERED_LEN, last_address, network_address};
pub use crate::kdf::{Digest, DerivedKey, MAX_OUTPUT_SIZE, derive_key};
pub use crate::salt::{INLINE_SALT_LEN, MAX_SALT_LEN, MIN_SALT_LEN, SaltBuffer, generate_salt};
pub use crate::uint::{MAX_ENCODED_LEN, decode_uint};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_key_from_generated_salt() {
        let salt = generate_salt(16).unwrap();
        let a = derive_key("sha512", b"password", salt.as_bytes(), 100).unwrap();
        let b = derive_key("sha512", b"password", salt.as_bytes(), 100).unwrap();

        assert_eq!(a.len(), 64);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn decoded_count_drives_salt_generation() {
        let count = decode_uint(&64i32.to_ne_bytes()).unwrap();
        let salt = generate_salt(count).unwrap();
        assert_eq!(salt.len(), 64);
    }
}
