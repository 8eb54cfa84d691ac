//! Encoding helpers shared by the DataType2 chain adapter and field service.
//!
//! The contract stores a `bytes32` and a dynamic `bytes` value. Callers send
//! either hex ("byte-like") strings or plain text; this crate decides which
//! one it got and turns it into the bytes the contract expects.
//!
//! # Key Items
//!
//! - [`is_bytes_like`]: `0x`-prefixed, even-length hex check
//! - [`zero_pad`] / [`zero_pad32`]: left zero padding to a fixed width
//! - [`encode_bytes32_string`]: short string packed into 32 bytes
//! - [`EncodingError`]: failures of the above

pub mod encoding;
pub mod error;

pub use encoding::{
    decode_bytes32_string, encode_bytes32_string, is_bytes_like, parse_hex, to_hex, utf8_bytes,
    zero_pad, zero_pad32, BYTES32_LEN,
};
pub use error::{EncodingError, EncodingResult};
