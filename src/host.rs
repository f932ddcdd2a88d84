//! Boundary adapter between a host query engine and the primitives.
//!
//! A host hands each function positional arguments that have already been
//! checked for count and static type; what remains here is semantic
//! validation and the mapping of each result onto the host's three-way
//! answer: a value, a SQL NULL, or an error. Integer arguments arrive as
//! raw native-endian byte buffers and go through the strict decoder.

use tracing::debug;

use crate::error::Error;
use crate::inet6;
use crate::kdf::{self, DerivedKey};
use crate::salt::{self, SaltBuffer};
use crate::uint::decode_uint;

/// What a single function call hands back to the host.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The call produced a value.
    Value(T),
    /// The call answers SQL NULL (only functions registered maybe-null).
    Null,
    /// The call failed; the host reports the error.
    Error(Error),
}

impl<T> Outcome<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Outcome::Null)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<crate::error::Result<T>> for Outcome<T> {
    fn from(res: crate::error::Result<T>) -> Self {
        match res {
            Ok(v) => Outcome::Value(v),
            Err(e) => Outcome::Error(e),
        }
    }
}

/// One method per host-callable function.
///
/// Implementations are stateless and reentrant; concurrent calls from any
/// number of host threads need no coordination.
pub trait HostFunctions {
    /// `pbkdf2(hash, password, salt, iters)` — iters arrives as the raw
    /// encoding of the host's integer argument.
    fn pbkdf2_hmac(
        &self,
        digest_name: &str,
        password: &[u8],
        salt: &[u8],
        iterations_raw: &[u8],
    ) -> Outcome<DerivedKey>;

    /// `get_salt(bytes)` — the byte count arrives as a raw encoding.
    fn get_salt(&self, byte_count_raw: &[u8]) -> Outcome<SaltBuffer>;

    /// `inet6_network_address(addr, prefix_len)`
    fn inet6_network_address(&self, addr: &str, prefix_len: i64) -> Outcome<String>;

    /// `inet6_last_address(addr, prefix_len)`
    fn inet6_last_address(&self, addr: &str, prefix_len: i64) -> Outcome<String>;
}

/// The stock implementation wired straight to the primitives.
#[derive(Debug, Default, Clone, Copy)]
pub struct Udf;

/// The address functions are registered maybe-null: bad input answers
/// NULL rather than aborting the enclosing statement. Environmental
/// failures still surface as errors.
fn address_outcome(res: crate::error::Result<String>) -> Outcome<String> {
    match res {
        Ok(text) => Outcome::Value(text),
        Err(e @ (Error::InvalidAddress(_) | Error::InvalidPrefixLength(_))) => {
            debug!(error = %e, "inet6 argument rejected, answering NULL");
            Outcome::Null
        }
        Err(e) => Outcome::Error(e),
    }
}

impl HostFunctions for Udf {
    fn pbkdf2_hmac(
        &self,
        digest_name: &str,
        password: &[u8],
        salt: &[u8],
        iterations_raw: &[u8],
    ) -> Outcome<DerivedKey> {
        let iterations = match decode_uint(iterations_raw) {
            Ok(n) => n,
            Err(e) => {
                debug!(error = %e, "invalid iteration count encoding");
                return Outcome::Error(e);
            }
        };
        debug!(digest = digest_name, iterations, "deriving key");
        kdf::derive_key(digest_name, password, salt, iterations).into()
    }

    fn get_salt(&self, byte_count_raw: &[u8]) -> Outcome<SaltBuffer> {
        let byte_count = match decode_uint(byte_count_raw) {
            Ok(n) => n,
            Err(e) => {
                debug!(error = %e, "invalid salt byte count encoding");
                return Outcome::Error(e);
            }
        };
        salt::generate_salt(byte_count).into()
    }

    fn inet6_network_address(&self, addr: &str, prefix_len: i64) -> Outcome<String> {
        address_outcome(inet6::network_address(addr, prefix_len))
    }

    fn inet6_last_address(&self, addr: &str, prefix_len: i64) -> Outcome<String> {
        address_outcome(inet6::last_address(addr, prefix_len))
    }
}
