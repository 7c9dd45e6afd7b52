//! Shared types for tricurve
//!
//! All data structures that cross module boundaries are defined here
//! for consistent serialization toward the presentation layer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Curve and Scheme Identifiers
// =============================================================================

/// Supported elliptic curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveId {
    /// secp256k1 (ECDSA and BIP-340 Schnorr)
    Secp256k1,
    /// Ed25519 (RFC 8032 EdDSA)
    Ed25519,
    /// BLS12-381 with public keys on G1
    #[serde(rename = "bls12-381")]
    Bls12381,
}

impl CurveId {
    /// All supported curves, in aggregation order
    pub const ALL: [CurveId; 3] = [CurveId::Secp256k1, CurveId::Ed25519, CurveId::Bls12381];

    /// Get the curve name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Ed25519 => "ed25519",
            Self::Bls12381 => "bls12-381",
        }
    }

    /// Get the compressed public key size in bytes
    pub fn public_key_size(&self) -> usize {
        match self {
            Self::Secp256k1 => 33,
            Self::Ed25519 => 32,
            Self::Bls12381 => 48,
        }
    }

    /// Get the signature schemes this curve produces
    pub fn schemes(&self) -> &'static [Scheme] {
        match self {
            Self::Secp256k1 => &[Scheme::Ecdsa, Scheme::Schnorr],
            Self::Ed25519 => &[Scheme::EdDsa],
            Self::Bls12381 => &[Scheme::Bls],
        }
    }

    /// Parse curve identifier from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "secp256k1" => Some(Self::Secp256k1),
            "ed25519" => Some(Self::Ed25519),
            "bls12-381" | "bls12381" | "bls" => Some(Self::Bls12381),
            _ => None,
        }
    }
}

impl std::fmt::Display for CurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Supported signature schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// ECDSA with RFC 6979 deterministic nonces (secp256k1)
    Ecdsa,
    /// BIP-340 Schnorr (secp256k1)
    Schnorr,
    /// RFC 8032 EdDSA (Ed25519)
    EdDsa,
    /// BLS signature on G2 (BLS12-381)
    Bls,
}

impl Scheme {
    /// All supported schemes, in aggregation order
    pub const ALL: [Scheme; 4] = [Scheme::Ecdsa, Scheme::Schnorr, Scheme::EdDsa, Scheme::Bls];

    /// Get the scheme name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ecdsa => "ecdsa",
            Self::Schnorr => "schnorr",
            Self::EdDsa => "eddsa",
            Self::Bls => "bls",
        }
    }

    /// The curve this scheme is defined on
    pub fn curve(&self) -> CurveId {
        match self {
            Self::Ecdsa | Self::Schnorr => CurveId::Secp256k1,
            Self::EdDsa => CurveId::Ed25519,
            Self::Bls => CurveId::Bls12381,
        }
    }

    /// Get the signature size in bytes
    pub fn signature_size(&self) -> usize {
        match self {
            Self::Ecdsa | Self::Schnorr | Self::EdDsa => 64,
            Self::Bls => 96,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Points and Keys
// =============================================================================

/// Affine coordinates of a curve point, as decimal strings
///
/// Projective representations are normalized before extraction, so no
/// scaling factor is ever exposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinePoint {
    pub x: String,
    pub y: String,
}

/// A derived public key for one curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyEntry {
    pub curve: CurveId,
    /// Canonical compressed point encoding
    #[serde(with = "crate::serde_bytes::hex_vec")]
    pub compressed: Vec<u8>,
    /// Affine coordinates for display; absent only if extraction failed
    pub affine: Option<AffinePoint>,
}

impl PublicKeyEntry {
    /// Compressed encoding as a hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.compressed)
    }
}

/// A signature under one (curve, scheme) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub curve: CurveId,
    pub scheme: Scheme,
    #[serde(with = "crate::serde_bytes::hex_vec")]
    pub bytes: Vec<u8>,
}

impl SignatureEntry {
    /// Signature bytes as a hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

// =============================================================================
// Aggregated Results
// =============================================================================

/// Public keys for all three curves, derived from one scalar
///
/// The set is complete by construction; a partially derived result
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationResult {
    pub secp256k1: PublicKeyEntry,
    pub ed25519: PublicKeyEntry,
    pub bls12_381: PublicKeyEntry,
}

impl DerivationResult {
    /// Look up the entry for a curve
    pub fn get(&self, curve: CurveId) -> &PublicKeyEntry {
        match curve {
            CurveId::Secp256k1 => &self.secp256k1,
            CurveId::Ed25519 => &self.ed25519,
            CurveId::Bls12381 => &self.bls12_381,
        }
    }

    /// Entries in fixed curve order
    pub fn entries(&self) -> [&PublicKeyEntry; 3] {
        [&self.secp256k1, &self.ed25519, &self.bls12_381]
    }

    /// Render as JSON for the presentation layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Signatures for all supported schemes over one (scalar, message) pair
///
/// secp256k1 contributes two entries, one per scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningResult {
    pub secp256k1_ecdsa: SignatureEntry,
    pub secp256k1_schnorr: SignatureEntry,
    pub ed25519: SignatureEntry,
    pub bls12_381: SignatureEntry,
}

impl SigningResult {
    /// Look up the entry for a (curve, scheme) pair
    pub fn get(&self, curve: CurveId, scheme: Scheme) -> Option<&SignatureEntry> {
        match (curve, scheme) {
            (CurveId::Secp256k1, Scheme::Ecdsa) => Some(&self.secp256k1_ecdsa),
            (CurveId::Secp256k1, Scheme::Schnorr) => Some(&self.secp256k1_schnorr),
            (CurveId::Ed25519, Scheme::EdDsa) => Some(&self.ed25519),
            (CurveId::Bls12381, Scheme::Bls) => Some(&self.bls12_381),
            _ => None,
        }
    }

    /// Entries in fixed scheme order
    pub fn entries(&self) -> [&SignatureEntry; 4] {
        [
            &self.secp256k1_ecdsa,
            &self.secp256k1_schnorr,
            &self.ed25519,
            &self.bls12_381,
        ]
    }

    /// Render as JSON for the presentation layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// MARK: - Tests
