use proptest::prelude::*;
use tricurve::curves::{self, Bls12381Backend, CurveBackend, Ed25519Backend, PointEncoder, Secp256k1Backend};
use tricurve::{derive_all_keys, CurveId, Scalar, Scheme};

fn any_scalar() -> impl Strategy<Value = Scalar> {
    prop::array::uniform32(any::<u8>()).prop_filter_map("valid cross-curve scalar", |bytes| {
        Scalar::from_bytes(bytes).ok()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn derivation_is_deterministic(scalar in any_scalar()) {
        let a = derive_all_keys(&scalar).unwrap();
        let b = derive_all_keys(&scalar).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn compressed_sizes_are_fixed(scalar in any_scalar()) {
        let keys = derive_all_keys(&scalar).unwrap();
        for curve in CurveId::ALL {
            prop_assert_eq!(keys.get(curve).compressed.len(), curve.public_key_size());
        }
    }

    #[test]
    fn secp256k1_roundtrip_preserves_affine(scalar in any_scalar()) {
        let point = Secp256k1Backend::derive_public_key(&scalar).unwrap();
        let compressed = Secp256k1Backend::compress(&point);
        let decoded = Secp256k1Backend::decompress(&compressed).unwrap();
        prop_assert_eq!(
            Secp256k1Backend::to_affine(&decoded).unwrap(),
            Secp256k1Backend::to_affine(&point).unwrap()
        );
    }

    #[test]
    fn ed25519_roundtrip_preserves_affine(scalar in any_scalar()) {
        let point = Ed25519Backend::derive_public_key(&scalar).unwrap();
        let compressed = Ed25519Backend::compress(&point);
        let decoded = Ed25519Backend::decompress(&compressed).unwrap();
        prop_assert_eq!(
            Ed25519Backend::to_affine(&decoded).unwrap(),
            Ed25519Backend::to_affine(&point).unwrap()
        );
    }

    #[test]
    fn bls12_381_roundtrip_preserves_affine(scalar in any_scalar()) {
        let point = Bls12381Backend::derive_public_key(&scalar).unwrap();
        let compressed = Bls12381Backend::compress(&point);
        let decoded = Bls12381Backend::decompress(&compressed).unwrap();
        prop_assert_eq!(
            Bls12381Backend::to_affine(&decoded).unwrap(),
            Bls12381Backend::to_affine(&point).unwrap()
        );
    }

    #[test]
    fn every_scheme_signs_and_verifies(scalar in any_scalar(), message in prop::collection::vec(any::<u8>(), 0..256)) {
        for scheme in Scheme::ALL {
            let key = curves::derive_public_key(scheme.curve(), &scalar).unwrap();
            let sig = curves::sign(scheme, &scalar, &message).unwrap();
            prop_assert!(curves::verify(scheme, &key.compressed, &message, &sig.bytes).unwrap());
        }
    }

    #[test]
    fn ecdsa_and_schnorr_never_collide(scalar in any_scalar(), message in prop::collection::vec(any::<u8>(), 0..64)) {
        let ecdsa = curves::sign(Scheme::Ecdsa, &scalar, &message).unwrap();
        let schnorr = curves::sign(Scheme::Schnorr, &scalar, &message).unwrap();
        prop_assert_ne!(ecdsa.bytes, schnorr.bytes);
    }

    #[test]
    fn rejected_hex_never_panics(input in "[ -~]{0,80}") {
        // Arbitrary printable input either parses or errors; no panic path
        let _ = Scalar::from_hex(&input);
    }
}
