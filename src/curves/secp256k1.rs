//! secp256k1 backend
//!
//! Features:
//! - ECDSA with RFC 6979 deterministic nonces, compact 64-byte encoding
//! - BIP-340 Schnorr signatures over the same derived key
//! - Compressed SEC1 public keys (33 bytes)
//!
//! Both schemes sign the SHA-256 digest of the message, so one message
//! yields two distinct, independently verifiable signatures for one key.

use secp256k1::ecdsa::Signature as EcdsaSignature;
use secp256k1::schnorr::Signature as SchnorrSignature;
use secp256k1::{Keypair, Message, PublicKey, Secp256k1, SecretKey, XOnlyPublicKey};
use sha2::{Digest, Sha256};

use super::{CurveBackend, PointEncoder};
use crate::encoding;
use crate::error::{TricurveError, TricurveResult};
use crate::scalar::Scalar;
use crate::types::{AffinePoint, CurveId};

/// secp256k1 backend implementation
pub struct Secp256k1Backend;

/// Hash-to-scalar rule shared by both secp256k1 schemes
pub(crate) fn message_digest(message: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(message);
    hasher.finalize().into()
}

fn secret_key(scalar: &Scalar) -> TricurveResult<SecretKey> {
    scalar.check_range(CurveId::Secp256k1)?;
    SecretKey::from_slice(scalar.as_bytes())
        .map_err(|_| TricurveError::InvalidScalar(CurveId::Secp256k1))
}

impl CurveBackend for Secp256k1Backend {
    type PublicKey = PublicKey;
    type Signature = [u8; 64];

    fn derive_public_key(scalar: &Scalar) -> TricurveResult<Self::PublicKey> {
        let secp = Secp256k1::new();
        Ok(PublicKey::from_secret_key(&secp, &secret_key(scalar)?))
    }

    fn sign(scalar: &Scalar, message: &[u8]) -> TricurveResult<Self::Signature> {
        let secp = Secp256k1::new();
        let sk = secret_key(scalar)?;
        let msg = Message::from_digest(message_digest(message));
        Ok(secp.sign_ecdsa(&msg, &sk).serialize_compact())
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> TricurveResult<bool> {
        let secp = Secp256k1::new();
        let pk = PublicKey::from_slice(public_key)
            .map_err(|e| TricurveError::EncodingError(e.to_string()))?;
        let sig = EcdsaSignature::from_compact(signature)
            .map_err(|e| TricurveError::EncodingError(e.to_string()))?;
        let msg = Message::from_digest(message_digest(message));
        Ok(secp.verify_ecdsa(&msg, &sig, &pk).is_ok())
    }
}

// MARK: - Schnorr

impl Secp256k1Backend {
    /// BIP-340 Schnorr signature over the shared SHA-256 digest
    ///
    /// Deterministic: no auxiliary randomness is mixed into the nonce.
    pub fn sign_schnorr(scalar: &Scalar, message: &[u8]) -> TricurveResult<[u8; 64]> {
        let secp = Secp256k1::new();
        let keypair = Keypair::from_secret_key(&secp, &secret_key(scalar)?);
        let msg = Message::from_digest(message_digest(message));
        let sig = secp.sign_schnorr_no_aux_rand(&msg, &keypair);
        Ok(*sig.as_ref())
    }

    /// Verify a BIP-340 signature
    ///
    /// Accepts either a 32-byte x-only key or the 33-byte compressed key
    /// the backend derives; the latter is reduced to its x-only form.
    pub fn verify_schnorr(
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> TricurveResult<bool> {
        let secp = Secp256k1::new();
        let xonly = match public_key.len() {
            32 => XOnlyPublicKey::from_slice(public_key),
            _ => PublicKey::from_slice(public_key).map(|pk| pk.x_only_public_key().0),
        }
        .map_err(|e| TricurveError::EncodingError(e.to_string()))?;
        let sig = SchnorrSignature::from_slice(signature)
            .map_err(|e| TricurveError::EncodingError(e.to_string()))?;
        let msg = Message::from_digest(message_digest(message));
        Ok(secp.verify_schnorr(&sig, &msg, &xonly).is_ok())
    }
}

impl PointEncoder for Secp256k1Backend {
    fn compress(point: &Self::PublicKey) -> Vec<u8> {
        point.serialize().to_vec()
    }

    fn decompress(bytes: &[u8]) -> TricurveResult<Self::PublicKey> {
        PublicKey::from_slice(bytes).map_err(|e| TricurveError::EncodingError(e.to_string()))
    }

    fn to_affine(point: &Self::PublicKey) -> TricurveResult<AffinePoint> {
        let uncompressed = point.serialize_uncompressed();
        Ok(encoding::affine_from_be(
            &uncompressed[1..33],
            &uncompressed[33..65],
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
        let point = Secp256k1Backend::derive_public_key(&default_scalar()).unwrap();
        assert_eq!(
            hex::encode(Secp256k1Backend::compress(&point)),
            "034646ae5047316b4230d0086c8acec687f00b1cd9d1dc634f6cb358ac0a9a8fff"
        );
    }

    #[test]
    fn test_known_affine_coordinates() {
        let point = Secp256k1Backend::derive_public_key(&default_scalar()).unwrap();
        let affine = Secp256k1Backend::to_affine(&point).unwrap();
        assert_eq!(
            affine.x,
            "31786781763520711516504796705501580263047480643491642414438614973346706264063"
        );
        assert_eq!(
            affine.y,
            "115098966614433306530954635991961836831388920962654509778142658150360531838297"
        );
    }

    #[test]
    fn test_ecdsa_sign_verify() {
        let scalar = default_scalar();
        let point = Secp256k1Backend::derive_public_key(&scalar).unwrap();
        let compressed = Secp256k1Backend::compress(&point);

        let message = b"Hello, secp256k1!";
        let signature = Secp256k1Backend::sign(&scalar, message).unwrap();
        assert_eq!(signature.len(), 64);

        assert!(Secp256k1Backend::verify(&compressed, message, &signature).unwrap());
        assert!(!Secp256k1Backend::verify(&compressed, b"wrong message", &signature).unwrap());
    }

    #[test]
    fn test_ecdsa_is_deterministic() {
        let scalar = default_scalar();
        let a = Secp256k1Backend::sign(&scalar, b"msg").unwrap();
        let b = Secp256k1Backend::sign(&scalar, b"msg").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_schnorr_sign_verify() {
        let scalar = default_scalar();
        let point = Secp256k1Backend::derive_public_key(&scalar).unwrap();
        let compressed = Secp256k1Backend::compress(&point);

        let message = b"Hello, Schnorr!";
        let signature = Secp256k1Backend::sign_schnorr(&scalar, message).unwrap();
        assert_eq!(signature.len(), 64);

        assert!(Secp256k1Backend::verify_schnorr(&compressed, message, &signature).unwrap());
        assert!(
            !Secp256k1Backend::verify_schnorr(&compressed, b"wrong message", &signature).unwrap()
        );
    }

    #[test]
    fn test_schemes_disagree_on_bytes() {
        let scalar = default_scalar();
        let message = b"same message, two schemes";
        let ecdsa = Secp256k1Backend::sign(&scalar, message).unwrap();
        let schnorr = Secp256k1Backend::sign_schnorr(&scalar, message).unwrap();
        assert_ne!(ecdsa, schnorr);
    }

    #[test]
    fn test_empty_message_signs() {
        let scalar = default_scalar();
        let point = Secp256k1Backend::derive_public_key(&scalar).unwrap();
        let compressed = Secp256k1Backend::compress(&point);

        let ecdsa = Secp256k1Backend::sign(&scalar, b"").unwrap();
        let schnorr = Secp256k1Backend::sign_schnorr(&scalar, b"").unwrap();
        assert!(Secp256k1Backend::verify(&compressed, b"", &ecdsa).unwrap());
        assert!(Secp256k1Backend::verify_schnorr(&compressed, b"", &schnorr).unwrap());
    }

    #[test]
    fn test_compress_roundtrip() {
        let point = Secp256k1Backend::derive_public_key(&default_scalar()).unwrap();
        let compressed = Secp256k1Backend::compress(&point);
        assert_eq!(compressed.len(), 33);
        assert!(compressed[0] == 0x02 || compressed[0] == 0x03);

        let decoded = Secp256k1Backend::decompress(&compressed).unwrap();
        assert_eq!(
            Secp256k1Backend::to_affine(&decoded).unwrap(),
            Secp256k1Backend::to_affine(&point).unwrap()
        );
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        assert!(matches!(
            Secp256k1Backend::decompress(&[0x02; 12]),
            Err(TricurveError::EncodingError(_))
        ));
    }

    // BIP-340 test vector 0: the published signature was produced with zero
    // auxiliary randomness, so it differs from our nonce choice but must
    // still verify against the same key.
    #[test]
    fn test_bip340_vector_0_key_and_verify() {
        let mut bytes = [0u8; 32];
        bytes[31] = 3;
        let scalar = Scalar::from_bytes(bytes).unwrap();

        let point = Secp256k1Backend::derive_public_key(&scalar).unwrap();
        let compressed = Secp256k1Backend::compress(&point);
        assert_eq!(
            hex::encode(&compressed[1..]),
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"
        );

        let message =
            hex::decode("0000000000000000000000000000000000000000000000000000000000000000")
                .unwrap();
        let published_sig = hex::decode(
            "e907831f80848d1069a5371b402410364bdf1c5f8307b0084c55f1ce2dca8215\
             25f66a4a85ea8b71e482a74f382d2ce5ebeee8fdb2172f477df4900d310536c0",
        )
        .unwrap();

        // The vector signs the raw 32-byte message; bypass the digest step
        let secp = Secp256k1::new();
        let xonly = XOnlyPublicKey::from_slice(&compressed[1..]).unwrap();
        let sig = SchnorrSignature::from_slice(&published_sig).unwrap();
        let mut msg_arr = [0u8; 32];
        msg_arr.copy_from_slice(&message);
        assert!(secp
            .verify_schnorr(&sig, &Message::from_digest(msg_arr), &xonly)
            .is_ok());
    }
}
