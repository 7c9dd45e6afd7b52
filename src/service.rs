//! Key/signature service
//!
//! Stateless fan-out over the three curve backends. Each branch runs on its
//! own scoped thread; the join is a barrier, and aggregation is keyed by
//! curve identifier, never by completion order. A failure on any branch
//! fails the whole operation in fixed curve order and late results are
//! discarded; a partial result is never returned.

use std::thread;

use crate::curves;
use crate::error::{TricurveError, TricurveResult};
use crate::logging::{LogEntry, LogLevel};
use crate::scalar::Scalar;
use crate::types::{CurveId, DerivationResult, Scheme, SigningResult};

fn join_branch<T>(
    handle: thread::ScopedJoinHandle<'_, TricurveResult<T>>,
    curve: CurveId,
) -> TricurveResult<T> {
    handle
        .join()
        .map_err(|_| TricurveError::BackendFailure(format!("{} backend panicked", curve)))?
}

/// Derive the public keys for all three curves from one scalar
pub fn derive_all_keys(scalar: &Scalar) -> TricurveResult<DerivationResult> {
    LogEntry::new(LogLevel::Debug, "service", "deriving public keys")
        .field("curves", CurveId::ALL.len())
        .emit();

    let (secp256k1, ed25519, bls12_381) = thread::scope(|s| {
        let secp = s.spawn(|| curves::derive_public_key(CurveId::Secp256k1, scalar));
        let ed = s.spawn(|| curves::derive_public_key(CurveId::Ed25519, scalar));
        let bls = s.spawn(|| curves::derive_public_key(CurveId::Bls12381, scalar));
        (
            join_branch(secp, CurveId::Secp256k1),
            join_branch(ed, CurveId::Ed25519),
            join_branch(bls, CurveId::Bls12381),
        )
    });

    Ok(DerivationResult {
        secp256k1: secp256k1?,
        ed25519: ed25519?,
        bls12_381: bls12_381?,
    })
}

/// Sign one message under every supported scheme
///
/// The secp256k1 branch produces both its schemes, so one fan-out yields
/// four signatures.
pub fn sign_all_schemes(scalar: &Scalar, message: &[u8]) -> TricurveResult<SigningResult> {
    LogEntry::new(LogLevel::Debug, "service", "signing message")
        .field("schemes", Scheme::ALL.len())
        .field("message_len", message.len())
        .emit();

    let (secp, ed25519, bls12_381) = thread::scope(|s| {
        let secp = s.spawn(|| {
            let ecdsa = curves::sign(Scheme::Ecdsa, scalar, message)?;
            let schnorr = curves::sign(Scheme::Schnorr, scalar, message)?;
            Ok((ecdsa, schnorr))
        });
        let ed = s.spawn(|| curves::sign(Scheme::EdDsa, scalar, message));
        let bls = s.spawn(|| curves::sign(Scheme::Bls, scalar, message));
        (
            join_branch(secp, CurveId::Secp256k1),
            join_branch(ed, CurveId::Ed25519),
            join_branch(bls, CurveId::Bls12381),
        )
    });

    let (secp256k1_ecdsa, secp256k1_schnorr) = secp?;
    Ok(SigningResult {
        secp256k1_ecdsa,
        secp256k1_schnorr,
        ed25519: ed25519?,
        bls12_381: bls12_381?,
    })
}

// MARK: - Tests
