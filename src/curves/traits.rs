//! Curve backend traits
//!
//! Defines the common interface the three curve backends implement.
//! Backends are stateless; every operation is a pure function of its
//! arguments.

use crate::error::TricurveResult;
use crate::scalar::Scalar;
use crate::types::AffinePoint;

/// Core trait for curve backend operations
pub trait CurveBackend {
    /// Opaque public key (point) type of the underlying library
    type PublicKey;
    /// Signature byte representation
    type Signature: AsRef<[u8]>;

    /// Derive the public key: generator times scalar, under this curve's
    /// scalar-handling convention. Re-validates the scalar and fails with
    /// `InvalidScalar` rather than produce undefined output.
    fn derive_public_key(scalar: &Scalar) -> TricurveResult<Self::PublicKey>;

    /// Produce this curve's canonical deterministic signature over the
    /// message bytes
    fn sign(scalar: &Scalar, message: &[u8]) -> TricurveResult<Self::Signature>;

    /// Verify a signature against a compressed public key
    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> TricurveResult<bool>;
}

/// Stable encoding surface over backend point types
///
/// The library point representation stays opaque; compressed bytes and
/// normalized affine coordinates are the only exported views.
pub trait PointEncoder: CurveBackend {
    /// Canonical compressed encoding
    fn compress(point: &Self::PublicKey) -> Vec<u8>;

    /// Parse a compressed encoding, rejecting malformed or non-canonical
    /// input with `EncodingError`
    fn decompress(bytes: &[u8]) -> TricurveResult<Self::PublicKey>;

    /// Normalized affine coordinates for display
    fn to_affine(point: &Self::PublicKey) -> TricurveResult<AffinePoint>;
}
