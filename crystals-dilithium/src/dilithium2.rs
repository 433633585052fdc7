//! Dilithium2 (NIST security level 2).
//!
//! Symmetric primitives: SHA-3/SHAKE.

use crate::params::dilithium2::*;
use crate::symmetric::Shake;

crate::types::define_dilithium_variant! {
    /// Dilithium2 signature scheme.
    ///
    /// Provides NIST Security Level 2.
    name: Dilithium2,
    symmetric: Shake
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_sizes() {
        assert_eq!(Dilithium2::VERIFICATION_KEY_SIZE, 1312);
        assert_eq!(Dilithium2::SIGNING_KEY_SIZE, 2528);
        assert_eq!(Dilithium2::SIGNATURE_SIZE, 2420);
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x25);
        let (sk, pk) = Dilithium2::keygen(&mut rng).unwrap();
        let sig = Dilithium2::sign(&sk, b"crystals").unwrap();
        assert!(Dilithium2::verify(&pk, b"crystals", &sig));
        assert!(!Dilithium2::verify(&pk, b"crystalz", &sig));
    }

    #[test]
    fn test_keygen_from_seed_matches_rng_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let (sk, pk) = Dilithium2::keygen(&mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let mut seed = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rng, &mut seed);
        let (sk2, pk2) = Dilithium2::keygen_from_seed(&seed);

        assert_eq!(pk, pk2);
        assert_eq!(sk.as_bytes(), sk2.as_bytes());
        assert_eq!(&sk.as_bytes()[..32], &pk.as_bytes()[..32]);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let (sk, _) = Dilithium2::keygen_from_seed(&[1; 32]);
        let a = Dilithium2::sign(&sk, b"same message").unwrap();
        let b = Dilithium2::sign(&sk, b"same message").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_with_seed_matches_rng_order() {
        let (sk, pk) = Dilithium2::keygen_from_seed(&[5; 32]);
        let mut rng = StdRng::seed_from_u64(21);
        let sig = Dilithium2::sign_randomized(&sk, b"seeded", &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(21);
        let mut rnd = [0u8; 64];
        rand::RngCore::fill_bytes(&mut rng, &mut rnd);
        let sig2 = Dilithium2::sign_with_seed(&sk, b"seeded", &rnd);

        assert_eq!(sig, sig2);
        assert_ne!(&sig2.as_bytes()[..32], &[0u8; 32]);
        assert!(Dilithium2::verify(&pk, b"seeded", &sig2));
    }

    #[test]
    fn test_randomized_signatures_differ() {
        let mut rng = StdRng::seed_from_u64(11);
        let (sk, pk) = Dilithium2::keygen_from_seed(&[2; 32]);
        let a = Dilithium2::sign_randomized(&sk, b"m", &mut rng).unwrap();
        let b = Dilithium2::sign_randomized(&sk, b"m", &mut rng).unwrap();
        assert_ne!(a, b);
        assert!(Dilithium2::verify(&pk, b"m", &a));
        assert!(Dilithium2::verify(&pk, b"m", &b));

        let c = Dilithium2::sign_with_seed(&sk, b"m", &[0x42; 64]);
        assert_eq!(c, Dilithium2::sign_with_seed(&sk, b"m", &[0x42; 64]));
        assert!(Dilithium2::verify(&pk, b"m", &c));
    }

    #[test]
    fn test_from_bytes_length_checks() {
        let err = VerificationKey::from_bytes(&[0u8; 1311]).unwrap_err();
        assert_eq!(err, Error::InvalidKeyLength { expected: 1312, actual: 1311 });
        assert!(matches!(
            SigningKey::from_bytes(&[0u8; 2529]),
            Err(Error::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            Signature::from_bytes(&[]),
            Err(Error::InvalidSignatureLength { expected: 2420, actual: 0 })
        ));
    }

    #[test]
    fn test_wrong_key_rejects() {
        let (sk, _) = Dilithium2::keygen_from_seed(&[3; 32]);
        let (_, other_pk) = Dilithium2::keygen_from_seed(&[4; 32]);
        let sig = Dilithium2::sign(&sk, b"m").unwrap();
        assert!(!Dilithium2::verify(&other_pk, b"m", &sig));
    }
}
