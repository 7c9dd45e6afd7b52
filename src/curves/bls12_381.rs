//! BLS12-381 backend
//!
//! Public keys on G1 (48-byte compressed, Zcash serialization), signatures
//! on G2 (96 bytes) under the BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_
//! ciphersuite. The SSWU map is constant-time, so hashing to the curve
//! needs no retry loop. Verification is the pairing check
//! e(pk, H(m)) == e(g1, sig). Single signer only; no aggregation.

use bls12_381::hash_to_curve::{ExpandMsgXmd, HashToCurve};
use bls12_381::{pairing, G1Affine, G1Projective, G2Affine, G2Projective, Scalar as Fr};
use group::Curve;
use sha2_bls::Sha256;

use super::{CurveBackend, PointEncoder};
use crate::encoding;
use crate::error::{TricurveError, TricurveResult};
use crate::scalar::Scalar;
use crate::types::{AffinePoint, CurveId};

/// Domain separation tag for message hashing
pub const SIGNATURE_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// BLS12-381 backend implementation
pub struct Bls12381Backend;

fn field_scalar(scalar: &Scalar) -> TricurveResult<Fr> {
    scalar.check_range(CurveId::Bls12381)?;
    let mut le = *scalar.as_bytes();
    le.reverse();
    Option::<Fr>::from(Fr::from_bytes(&le))
        .ok_or(TricurveError::InvalidScalar(CurveId::Bls12381))
}

fn hash_to_g2(message: &[u8]) -> G2Projective {
    <G2Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(message, SIGNATURE_DST)
}

impl CurveBackend for Bls12381Backend {
    type PublicKey = G1Affine;
    type Signature = [u8; 96];

    fn derive_public_key(scalar: &Scalar) -> TricurveResult<Self::PublicKey> {
        let sk = field_scalar(scalar)?;
        Ok((G1Projective::generator() * sk).to_affine())
    }

    fn sign(scalar: &Scalar, message: &[u8]) -> TricurveResult<Self::Signature> {
        let sk = field_scalar(scalar)?;
        let h = hash_to_g2(message);
        Ok((h * sk).to_affine().to_compressed())
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> TricurveResult<bool> {
        let pk = Self::decompress(public_key)?;

        let sig_bytes: [u8; 96] = signature.try_into().map_err(|_| {
            TricurveError::EncodingError(format!(
                "signature must be 96 bytes, got {}",
                signature.len()
            ))
        })?;
        let sig = Option::<G2Affine>::from(G2Affine::from_compressed(&sig_bytes))
            .ok_or_else(|| TricurveError::EncodingError("malformed G2 signature".into()))?;

        let h = hash_to_g2(message).to_affine();
        Ok(pairing(&pk, &h) == pairing(&G1Affine::generator(), &sig))
    }
}

impl PointEncoder for Bls12381Backend {
    fn compress(point: &Self::PublicKey) -> Vec<u8> {
        point.to_compressed().to_vec()
    }

    fn decompress(bytes: &[u8]) -> TricurveResult<Self::PublicKey> {
        let arr: [u8; 48] = bytes.try_into().map_err(|_| {
            TricurveError::EncodingError(format!("point must be 48 bytes, got {}", bytes.len()))
        })?;
        Option::<G1Affine>::from(G1Affine::from_compressed(&arr))
            .ok_or_else(|| TricurveError::EncodingError("malformed G1 point".into()))
    }

    fn to_affine(point: &Self::PublicKey) -> TricurveResult<AffinePoint> {
        if bool::from(point.is_identity()) {
            return Err(TricurveError::EncodingError(
                "point at infinity has no affine form".into(),
            ));
        }
        let uncompressed = point.to_uncompressed();
        Ok(encoding::affine_from_be(
            &uncompressed[..48],
            &uncompressed[48..],
        ))
    }
}

// MARK: - Tests

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_HEX: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn default_scalar() -> Scalar {
        Scalar::from_hex(DEFAULT_HEX).unwrap()
    }

    #[test]
    fn test_known_public_key() {
        let point = Bls12381Backend::derive_public_key(&default_scalar()).unwrap();
        assert_eq!(
            hex::encode(Bls12381Backend::compress(&point)),
            "86b50179774296419b7e8375118823ddb06940d9a28ea045ab418c7ecbe6da84\
             d416cb55406eec6393db97ac26e38bd4"
        );
    }

    #[test]
    fn test_sign_verify() {
        let scalar = default_scalar();
        let point = Bls12381Backend::derive_public_key(&scalar).unwrap();
        let compressed = Bls12381Backend::compress(&point);

        let message = b"Hello, BLS12-381!";
        let signature = Bls12381Backend::sign(&scalar, message).unwrap();
        assert_eq!(signature.len(), 96);

        assert!(Bls12381Backend::verify(&compressed, message, &signature).unwrap());
        assert!(!Bls12381Backend::verify(&compressed, b"wrong message", &signature).unwrap());
    }

    #[test]
    fn test_empty_message_signs() {
        let scalar = default_scalar();
        let point = Bls12381Backend::derive_public_key(&scalar).unwrap();
        let compressed = Bls12381Backend::compress(&point);

        let signature = Bls12381Backend::sign(&scalar, b"").unwrap();
        assert!(Bls12381Backend::verify(&compressed, b"", &signature).unwrap());
    }

    #[test]
    fn test_sign_is_deterministic() {
        let scalar = default_scalar();
        let a = Bls12381Backend::sign(&scalar, b"msg").unwrap();
        let b = Bls12381Backend::sign(&scalar, b"msg").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compress_roundtrip() {
        let point = Bls12381Backend::derive_public_key(&default_scalar()).unwrap();
        let compressed = Bls12381Backend::compress(&point);
        assert_eq!(compressed.len(), 48);
        // Compression flag is always set in the Zcash encoding
        assert_ne!(compressed[0] & 0x80, 0);

        let decoded = Bls12381Backend::decompress(&compressed).unwrap();
        assert_eq!(
            Bls12381Backend::to_affine(&decoded).unwrap(),
            Bls12381Backend::to_affine(&point).unwrap()
        );
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        assert!(Bls12381Backend::decompress(&[0u8; 12]).is_err());
        assert!(Bls12381Backend::decompress(&[0xffu8; 48]).is_err());
    }

    #[test]
    fn test_signature_is_valid_g2_encoding() {
        let signature = Bls12381Backend::sign(&default_scalar(), b"encoding check").unwrap();
        let decoded = Option::<G2Affine>::from(G2Affine::from_compressed(&signature));
        assert!(decoded.is_some());
    }
}
