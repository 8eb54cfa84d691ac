use crate::error::{EncodingError, EncodingResult};

/// Width of the contract's fixed `bytes32` slot.
pub const BYTES32_LEN: usize = 32;

/// Returns `true` if `input` is already a byte string: `0x` followed by an
/// even number of hex digits. The bare `0x` (zero bytes) qualifies.
pub fn is_bytes_like(input: &str) -> bool {
    let Some(digits) = input.strip_prefix("0x") else {
        return false;
    };
    digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode a hex string, with or without the `0x` prefix.
pub fn parse_hex(input: &str) -> EncodingResult<Vec<u8>> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(digits).map_err(|e| EncodingError::InvalidHex(format!("{input}: {e}")))
}

/// Lowercase `0x`-prefixed hex rendering.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// UTF-8 encoding of `input`.
pub fn utf8_bytes(input: &str) -> Vec<u8> {
    input.as_bytes().to_vec()
}

/// Left-pad `bytes` with zeros to exactly `width` bytes.
pub fn zero_pad(bytes: &[u8], width: usize) -> EncodingResult<Vec<u8>> {
    if bytes.len() > width {
        return Err(EncodingError::TooLong {
            max: width,
            actual: bytes.len(),
        });
    }
    let mut padded = vec![0u8; width - bytes.len()];
    padded.extend_from_slice(bytes);
    Ok(padded)
}

/// [`zero_pad`] to the `bytes32` width.
pub fn zero_pad32(bytes: &[u8]) -> EncodingResult<[u8; BYTES32_LEN]> {
    let padded = zero_pad(bytes, BYTES32_LEN)?;
    let mut out = [0u8; BYTES32_LEN];
    out.copy_from_slice(&padded);
    Ok(out)
}

/// Pack a short string into a `bytes32`: UTF-8 bytes followed by zeros.
///
/// At most 31 bytes fit, the last byte is always the null terminator.
pub fn encode_bytes32_string(input: &str) -> EncodingResult<[u8; BYTES32_LEN]> {
    let bytes = input.as_bytes();
    if bytes.len() > BYTES32_LEN - 1 {
        return Err(EncodingError::StringTooLong);
    }
    let mut out = [0u8; BYTES32_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Inverse of [`encode_bytes32_string`].
pub fn decode_bytes32_string(data: &[u8; BYTES32_LEN]) -> EncodingResult<String> {
    if data[BYTES32_LEN - 1] != 0 {
        return Err(EncodingError::MissingNullTerminator);
    }
    let end = data.iter().position(|b| *b == 0).unwrap_or(BYTES32_LEN);
    String::from_utf8(data[..end].to_vec()).map_err(|_| EncodingError::InvalidUtf8)
}
