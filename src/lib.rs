//! Tricurve Core Library
//!
//! Deterministic multi-curve key derivation and signing: one 32-byte
//! private scalar yields public keys and signatures on Ed25519, secp256k1
//! (ECDSA and BIP-340 Schnorr), and BLS12-381 G1.
//!
//! # Architecture
//!
//! This crate provides:
//! - **scalar**: hex parsing and cross-curve range validation
//! - **curves**: one stateless backend per curve, behind common traits
//! - **encoding**: compressed-point and affine-coordinate conversions
//! - **service**: the fan-out orchestrator, all-or-nothing aggregation
//! - **types**: serializable result types keyed by curve and scheme
//!
//! # Security
//!
//! This crate uses `zeroize` to clear scalar material from memory on drop.
//! No component caches a scalar beyond the call it serves, and key material
//! never appears in `Debug` output or log entries.
//!
//! # Example
//!
//! ```rust,ignore
//! use tricurve::{derive_all_keys, sign_all_schemes, Scalar};
//!
//! let scalar = Scalar::from_hex("0x...")?;
//! let keys = derive_all_keys(&scalar)?;
//! println!("secp256k1: {}", keys.secp256k1.to_hex());
//!
//! let sigs = sign_all_schemes(&scalar, b"hello")?;
//! println!("schnorr: {}", sigs.secp256k1_schnorr.to_hex());
//! ```

pub mod curves;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod scalar;
pub mod serde_bytes;
pub mod service;
pub mod types;

// Re-export key types for convenience
pub use error::{TricurveError, TricurveResult};
pub use scalar::Scalar;
pub use types::*;

// Re-export service entry points
pub use service::{derive_all_keys, sign_all_schemes};
