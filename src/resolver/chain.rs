//! Forwarding-chain header parsing.

/// Parse a raw forwarding-chain header value into an ordered list of address
/// tokens, outermost (closest to the original client) first.
///
/// Tokens are trimmed and empty pieces are dropped, so `"1.2.3.4, , 10.0.0.1"`
/// yields exactly two entries. Tokens are not validated as addresses;
/// malformed entries pass through unchanged.
pub fn parse_chain(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
