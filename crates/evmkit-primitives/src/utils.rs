use crate::{bits::FixedBytes, Address};
use alloc::string::String;

/// Simple interface to the [`keccak256`] hash function.
///
/// This uses the original Keccak padding (`0x01`), not the FIPS-202 SHA-3
/// padding (`0x06`) — the two differ and are not interchangeable. Ethereum's
/// function selectors, event topics and trie hashes all rely on the former.
///
/// [`keccak256`]: https://en.wikipedia.org/wiki/SHA-3
pub fn keccak256<T: AsRef<[u8]>>(bytes: T) -> FixedBytes<32> {
    fn keccak256(bytes: &[u8]) -> FixedBytes<32> {
        use tiny_keccak::{Hasher, Keccak};

        let mut output = [0u8; 32];
        let mut hasher = Keccak::v256();
        hasher.update(bytes);
        hasher.finalize(&mut output);
        output.into()
    }

    keccak256(bytes.as_ref())
}

/// Computes the ENS namehash of a dotted domain name.
///
/// Labels are split on `.` and folded right-to-left:
/// `acc = keccak256(acc ++ keccak256(label))`, starting from 32 zero bytes.
/// Label bytes are the name's raw UTF-8 encoding; this does not perform
/// IDNA/UTS-46 normalization, so it is only partially ENSIP-1 compliant for
/// names containing non-ASCII characters.
pub fn namehash(name: &str) -> FixedBytes<32> {
    if name.is_empty() {
        return FixedBytes::ZERO;
    }

    let mut node = [0u8; 32];
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&node);
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = *keccak256(buf);
    }
    FixedBytes(node)
}

/// Computes the first 4 bytes of `keccak256(preimage)` — a Solidity function
/// or error selector.
pub fn selector(preimage: &str) -> [u8; 4] {
    let hash = keccak256(preimage.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Computes the full 32-byte `keccak256(preimage)` — an event topic.
pub fn topic(preimage: &str) -> FixedBytes<32> {
    keccak256(preimage.as_bytes())
}

/// Renders an address using its EIP-55 mixed-case checksum.
///
/// Equivalent to `address.to_checksum(None)`; kept as a free function for
/// callers that prefer `utils::checksum_address(&addr)`.
pub fn checksum_address(address: &Address) -> String {
    address.to_checksum(None)
}
