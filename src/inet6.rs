//! IPv6 CIDR prefix address computations.
//!
//! Both operations work on the address as four 32-bit words in network
//! order (index 0 most significant) and render the result back to the
//! canonical compressed text form.

use std::fmt::Write;
use std::net::Ipv6Addr;

use crate::error::{Error, Result};

/// Canonical IPv6 text never exceeds this many bytes (32 hex nibbles,
/// 7 colons, a terminator, and one byte of margin).
pub const MAX_RENDERED_LEN: usize = 40;

fn parse(addr: &str, prefix_len: i64) -> Result<[u32; 4]> {
    if !(0..=128).contains(&prefix_len) {
        return Err(Error::InvalidPrefixLength(prefix_len));
    }

    let parsed: Ipv6Addr = addr
        .parse()
        .map_err(|_| Error::InvalidAddress(addr.into()))?;

    let octets = parsed.octets();
    let mut words = [0u32; 4];
    for (i, chunk) in octets.chunks_exact(4).enumerate() {
        words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}

fn render(words: [u32; 4]) -> Result<String> {
    let mut octets = [0u8; 16];
    for (i, word) in words.iter().enumerate() {
        octets[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }

    let mut text = String::with_capacity(MAX_RENDERED_LEN);
    write!(text, "{}", Ipv6Addr::from(octets)).map_err(|_| Error::Render)?;
    Ok(text)
}

/// Clears the `128 - prefix_len` host bits, whole words first, then a
/// partial-word mask. After the word loop the remaining shift amount is
/// in [1, 31], so no mask is ever built by shifting a full word width.
fn clear_host_bits(words: &mut [u32; 4], prefix_len: u32) {
    let mut host_bits = 128 - prefix_len;
    let mut idx = 3;

    while host_bits >= 32 {
        words[idx] = 0;
        host_bits -= 32;
        if idx == 0 {
            return;
        }
        idx -= 1;
    }

    if host_bits > 0 {
        words[idx] &= !0u32 << host_bits;
    }
}

/// Symmetric to [`clear_host_bits`]: sets the host bits instead, leaving
/// the network bits untouched.
fn set_host_bits(words: &mut [u32; 4], prefix_len: u32) {
    let mut host_bits = 128 - prefix_len;
    let mut idx = 3;

    while host_bits >= 32 {
        words[idx] = !0;
        host_bits -= 32;
        if idx == 0 {
            return;
        }
        idx -= 1;
    }

    if host_bits > 0 {
        words[idx] |= !(!0u32 << host_bits);
    }
}

/// Computes the network address (host bits cleared) of `addr` under a
/// `prefix_len`-bit prefix and renders it in canonical form.
pub fn network_address(addr: &str, prefix_len: i64) -> Result<String> {
    let mut words = parse(addr, prefix_len)?;
    clear_host_bits(&mut words, prefix_len as u32);
    render(words)
}

/// Computes the last address (host bits set) of `addr` under a
/// `prefix_len`-bit prefix and renders it in canonical form.
pub fn last_address(addr: &str, prefix_len: i64) -> Result<String> {
    let mut words = parse(addr, prefix_len)?;
    set_host_bits(&mut words, prefix_len as u32);
    render(words)
}
