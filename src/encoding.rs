//! Point encoding helpers
//!
//! Converts normalized affine coordinates into the arbitrary-precision
//! decimal form used for display, and recovers Ed25519 affine coordinates
//! from the compressed encoding (the dalek API keeps its field elements
//! opaque, so the RFC 8032 decoding runs on big integers here).

use num_bigint::BigUint;

use crate::error::{TricurveError, TricurveResult};
use crate::types::AffinePoint;

/// Ed25519 base field prime 2^255 - 19, big-endian
const ED25519_FIELD_PRIME: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xed,
];

/// Twisted Edwards constant d = -121665/121666 mod p, big-endian
const ED25519_D: [u8; 32] = [
    0x52, 0x03, 0x6c, 0xee, 0x2b, 0x6f, 0xfe, 0x73, 0x8c, 0xc7, 0x40, 0x79, 0x77, 0x79, 0xe8,
    0x98, 0x00, 0x70, 0x0a, 0x4d, 0x41, 0x41, 0xd8, 0xab, 0x75, 0xeb, 0x4d, 0xca, 0x13, 0x59,
    0x78, 0xa3,
];

/// Decimal rendering of a big-endian field element
pub(crate) fn be_decimal(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_string()
}

/// Build an affine point from big-endian x and y coordinates
pub(crate) fn affine_from_be(x: &[u8], y: &[u8]) -> AffinePoint {
    AffinePoint {
        x: be_decimal(x),
        y: be_decimal(y),
    }
}

/// Recover Ed25519 affine coordinates from a compressed point
///
/// Implements the x-from-y recovery of RFC 8032 section 5.1.3: the
/// encoding is the little-endian y coordinate with the parity of x in
/// the top bit.
pub(crate) fn ed25519_affine(compressed: &[u8; 32]) -> TricurveResult<AffinePoint> {
    let p = BigUint::from_bytes_be(&ED25519_FIELD_PRIME);
    let d = BigUint::from_bytes_be(&ED25519_D);

    let mut y_bytes = *compressed;
    let x_is_odd = y_bytes[31] & 0x80 != 0;
    y_bytes[31] &= 0x7f;
    let y = BigUint::from_bytes_le(&y_bytes);
    if y >= p {
        return Err(TricurveError::EncodingError(
            "y coordinate not reduced".into(),
        ));
    }

    // x^2 = (y^2 - 1) / (d y^2 + 1)
    let two = BigUint::from(2u8);
    let yy = y.modpow(&two, &p);
    let u = (yy.clone() + p.clone() - 1u8) % &p;
    let v = (d * yy + 1u8) % &p;

    // Candidate root x = u v^3 (u v^7)^((p - 5) / 8)
    let v3 = v.modpow(&BigUint::from(3u8), &p);
    let v7 = v.modpow(&BigUint::from(7u8), &p);
    let exp = (p.clone() - 5u8) / 8u8;
    let mut x = &u * &v3 % &p * (&u * &v7 % &p).modpow(&exp, &p) % &p;

    let vxx = &v * x.modpow(&two, &p) % &p;
    let neg_u = (p.clone() - u.clone()) % &p;
    if vxx == u {
        // direct root
    } else if vxx == neg_u {
        let sqrt_m1 = two.modpow(&((p.clone() - 1u8) / 4u8), &p);
        x = x * sqrt_m1 % &p;
    } else {
        return Err(TricurveError::EncodingError(
            "compressed y is not on the curve".into(),
        ));
    }

    if x.bits() == 0 && x_is_odd {
        return Err(TricurveError::EncodingError(
            "invalid sign bit for x = 0".into(),
        ));
    }
    if x.bit(0) != x_is_odd {
        x = p - x;
    }

    Ok(AffinePoint {
        x: x.to_string(),
        y: y.to_string(),
    })
}

// MARK: - Tests
