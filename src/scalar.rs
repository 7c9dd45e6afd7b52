//! Private scalar parsing and validation
//!
//! One 32-byte scalar feeds all three curve backends, so parsing validates
//! the value against every curve order up front. Backends still re-check
//! their own range before use.
//!
//! SECURITY: scalar bytes are zeroized on drop and never appear in `Debug`
//! output or log entries.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{TricurveError, TricurveResult};
use crate::types::CurveId;

/// Scalar width in bytes
pub const SCALAR_SIZE: usize = 32;

/// secp256k1 group order n, big-endian
const SECP256K1_ORDER: [u8; SCALAR_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// Ed25519 group order l, big-endian; the smallest of the three
const ED25519_ORDER: [u8; SCALAR_SIZE] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5,
    0xd3, 0xed,
];

/// BLS12-381 scalar field order r, big-endian
const BLS12_381_ORDER: [u8; SCALAR_SIZE] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8,
    0x05, 0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00,
    0x00, 0x01,
];

/// Group order for a curve, big-endian
pub(crate) fn curve_order(curve: CurveId) -> &'static [u8; SCALAR_SIZE] {
    match curve {
        CurveId::Secp256k1 => &SECP256K1_ORDER,
        CurveId::Ed25519 => &ED25519_ORDER,
        CurveId::Bls12381 => &BLS12_381_ORDER,
    }
}

fn in_range(bytes: &[u8; SCALAR_SIZE], curve: CurveId) -> bool {
    let nonzero = bytes.iter().any(|b| *b != 0);
    // Big-endian fixed width, so lexicographic comparison is numeric
    nonzero && bytes[..] < curve_order(curve)[..]
}

/// A validated 32-byte private scalar, big-endian
///
/// Immutable once constructed; valid for every supported curve.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; SCALAR_SIZE]);

impl Scalar {
    /// Parse a scalar from a hex string, with optional `0x` prefix
    pub fn from_hex(input: &str) -> TricurveResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(TricurveError::InvalidEncoding(format!(
                "unexpected character {:?}",
                bad
            )));
        }
        if digits.len() != SCALAR_SIZE * 2 {
            return Err(TricurveError::InvalidEncoding(format!(
                "expected {} hex digits, got {}",
                SCALAR_SIZE * 2,
                digits.len()
            )));
        }

        let decoded = hex::decode(digits).map_err(|e| TricurveError::InvalidEncoding(e.to_string()))?;
        let mut bytes = [0u8; SCALAR_SIZE];
        bytes.copy_from_slice(&decoded);
        Self::from_bytes(bytes)
    }

    /// Construct from raw big-endian bytes, validating against every curve
    pub fn from_bytes(bytes: [u8; SCALAR_SIZE]) -> TricurveResult<Self> {
        for curve in CurveId::ALL {
            if !in_range(&bytes, curve) {
                return Err(TricurveError::ScalarOutOfRange(curve));
            }
        }
        Ok(Self(bytes))
    }

    /// Sample a uniformly random valid scalar from the OS RNG
    ///
    /// Rejection-samples until the value is below every curve order.
    pub fn generate() -> Self {
        let mut buf = Zeroizing::new([0u8; SCALAR_SIZE]);
        loop {
            OsRng.fill_bytes(buf.as_mut());
            if let Ok(scalar) = Self::from_bytes(*buf) {
                return scalar;
            }
        }
    }

    /// Raw big-endian bytes
    pub fn as_bytes(&self) -> &[u8; SCALAR_SIZE] {
        &self.0
    }

    /// Hex encoding, without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Backend-side re-validation against a single curve's order
    pub(crate) fn check_range(&self, curve: CurveId) -> TricurveResult<()> {
        if in_range(&self.0, curve) {
            Ok(())
        } else {
            Err(TricurveError::InvalidScalar(curve))
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", crate::logging::redact_hex(&self.to_hex()))
    }
}

// MARK: - Tests
