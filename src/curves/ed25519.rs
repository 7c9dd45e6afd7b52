//! Ed25519 backend
//!
//! RFC 8032 EdDSA. The 32-byte scalar is the seed: the library expands it
//! through SHA-512 and clamps before the generator multiplication, so the
//! effective exponent differs from the raw bytes by design. Signing covers
//! the raw message; no caller-side pre-hash.

use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use super::{CurveBackend, PointEncoder};
use crate::encoding;
use crate::error::{TricurveError, TricurveResult};
use crate::scalar::Scalar;
use crate::types::{AffinePoint, CurveId};

/// Ed25519 backend implementation
pub struct Ed25519Backend;

fn signing_key(scalar: &Scalar) -> TricurveResult<SigningKey> {
    scalar.check_range(CurveId::Ed25519)?;
    Ok(SigningKey::from_bytes(scalar.as_bytes()))
}

impl CurveBackend for Ed25519Backend {
    type PublicKey = VerifyingKey;
    type Signature = [u8; 64];

    fn derive_public_key(scalar: &Scalar) -> TricurveResult<Self::PublicKey> {
        Ok(signing_key(scalar)?.verifying_key())
    }

    fn sign(scalar: &Scalar, message: &[u8]) -> TricurveResult<Self::Signature> {
        Ok(signing_key(scalar)?.sign(message).to_bytes())
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> TricurveResult<bool> {
        let pk_bytes: [u8; 32] = public_key.try_into().map_err(|_| {
            TricurveError::EncodingError(format!(
                "public key must be 32 bytes, got {}",
                public_key.len()
            ))
        })?;
        let verifying_key = VerifyingKey::from_bytes(&pk_bytes)
            .map_err(|e| TricurveError::EncodingError(e.to_string()))?;

        let sig_bytes: [u8; 64] = signature.try_into().map_err(|_| {
            TricurveError::EncodingError(format!(
                "signature must be 64 bytes, got {}",
                signature.len()
            ))
        })?;
        let sig = Signature::from_bytes(&sig_bytes);

        Ok(verifying_key.verify(message, &sig).is_ok())
    }
}

impl PointEncoder for Ed25519Backend {
    fn compress(point: &Self::PublicKey) -> Vec<u8> {
        point.to_bytes().to_vec()
    }

    fn decompress(bytes: &[u8]) -> TricurveResult<Self::PublicKey> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            TricurveError::EncodingError(format!("point must be 32 bytes, got {}", bytes.len()))
        })?;

        // Decode through the Edwards point to enforce canonical encodings;
        // the field decoder alone would silently reduce an unreduced y
        let edwards = CompressedEdwardsY(arr)
            .decompress()
            .ok_or_else(|| TricurveError::EncodingError("not a valid curve point".into()))?;
        if edwards.compress().to_bytes() != arr {
            return Err(TricurveError::EncodingError(
                "non-canonical point encoding".into(),
            ));
        }

        VerifyingKey::from_bytes(&arr).map_err(|e| TricurveError::EncodingError(e.to_string()))
    }

    fn to_affine(point: &Self::PublicKey) -> TricurveResult<AffinePoint> {
        encoding::ed25519_affine(&point.to_bytes())
    }
}

// MARK: - Tests
