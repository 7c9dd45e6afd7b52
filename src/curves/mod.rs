//! Multi-curve backends
//!
//! One backend per supported curve:
//!
//! - `secp256k1`: ECDSA (RFC 6979) and BIP-340 Schnorr
//! - `ed25519`: RFC 8032 EdDSA
//! - `bls12_381`: BLS signatures, public keys on G1
//!
//! # Architecture
//!
//! All backends implement the `CurveBackend` and `PointEncoder` traits.
//! The functions below dispatch on curve or scheme identifiers and return
//! the serializable entry types, so the service layer never touches a
//! library point type directly. Backends share no state; calls with equal
//! inputs always produce equal outputs.

pub mod bls12_381;
pub mod ed25519;
pub mod secp256k1;
pub mod traits;

pub use bls12_381::Bls12381Backend;
pub use ed25519::Ed25519Backend;
pub use secp256k1::Secp256k1Backend;
pub use traits::{CurveBackend, PointEncoder};

use crate::error::TricurveResult;
use crate::scalar::Scalar;
use crate::types::{CurveId, PublicKeyEntry, Scheme, SignatureEntry};

/// Derive the public key entry for one curve
pub fn derive_public_key(curve: CurveId, scalar: &Scalar) -> TricurveResult<PublicKeyEntry> {
    match curve {
        CurveId::Secp256k1 => {
            let point = Secp256k1Backend::derive_public_key(scalar)?;
            Ok(PublicKeyEntry {
                curve,
                affine: Some(Secp256k1Backend::to_affine(&point)?),
                compressed: Secp256k1Backend::compress(&point),
            })
        }
        CurveId::Ed25519 => {
            let point = Ed25519Backend::derive_public_key(scalar)?;
            Ok(PublicKeyEntry {
                curve,
                affine: Some(Ed25519Backend::to_affine(&point)?),
                compressed: Ed25519Backend::compress(&point),
            })
        }
        CurveId::Bls12381 => {
            let point = Bls12381Backend::derive_public_key(scalar)?;
            Ok(PublicKeyEntry {
                curve,
                affine: Some(Bls12381Backend::to_affine(&point)?),
                compressed: Bls12381Backend::compress(&point),
            })
        }
    }
}

/// Produce the signature entry for one scheme
///
/// The scheme pins the curve, so no invalid pairing can be requested.
pub fn sign(scheme: Scheme, scalar: &Scalar, message: &[u8]) -> TricurveResult<SignatureEntry> {
    let bytes = match scheme {
        Scheme::Ecdsa => Secp256k1Backend::sign(scalar, message)?.to_vec(),
        Scheme::Schnorr => Secp256k1Backend::sign_schnorr(scalar, message)?.to_vec(),
        Scheme::EdDsa => Ed25519Backend::sign(scalar, message)?.to_vec(),
        Scheme::Bls => Bls12381Backend::sign(scalar, message)?.to_vec(),
    };
    Ok(SignatureEntry {
        curve: scheme.curve(),
        scheme,
        bytes,
    })
}

/// Verify a signature produced by `sign` against a compressed public key
pub fn verify(
    scheme: Scheme,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> TricurveResult<bool> {
    match scheme {
        Scheme::Ecdsa => Secp256k1Backend::verify(public_key, message, signature),
        Scheme::Schnorr => Secp256k1Backend::verify_schnorr(public_key, message, signature),
        Scheme::EdDsa => Ed25519Backend::verify(public_key, message, signature),
        Scheme::Bls => Bls12381Backend::verify(public_key, message, signature),
    }
}

// MARK: - Tests
