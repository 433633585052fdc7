//! Dilithium5 (NIST security level 5).
//!
//! Symmetric primitives: SHA-3/SHAKE.

use crate::params::dilithium5::*;
use crate::symmetric::Shake;

crate::types::define_dilithium_variant! {
    /// Dilithium5 signature scheme.
    ///
    /// Provides NIST Security Level 5.
    name: Dilithium5,
    symmetric: Shake
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_sizes() {
        assert_eq!(Dilithium5::VERIFICATION_KEY_SIZE, 2592);
        assert_eq!(Dilithium5::SIGNING_KEY_SIZE, 4864);
        assert_eq!(Dilithium5::SIGNATURE_SIZE, 4595);
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x55);
        let (sk, pk) = Dilithium5::keygen(&mut rng).unwrap();
        let sig = Dilithium5::sign(&sk, b"crystals").unwrap();
        assert!(Dilithium5::verify(&pk, b"crystals", &sig));
        assert!(!Dilithium5::verify(&pk, b"crystalz", &sig));
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let (sk, pk) = Dilithium5::keygen_from_seed(&[5; 32]);
        let sk2 = SigningKey::from_bytes(sk.as_bytes()).unwrap();
        let pk2 = VerificationKey::from_bytes(pk.as_bytes()).unwrap();
        let sig = Dilithium5::sign(&sk2, b"").unwrap();
        let sig2 = Signature::from_bytes(sig.as_bytes()).unwrap();
        assert!(Dilithium5::verify(&pk2, b"", &sig2));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let (sk, pk) = Dilithium5::keygen_from_seed(&[0x55; 32]);
        let sig = Dilithium5::sign(&sk, b"payload").unwrap();
        let mut bytes = sig.as_bytes().to_vec();
        bytes[4595 / 2] ^= 0x04;
        let bad = Signature::from_bytes(&bytes).unwrap();
        assert!(!Dilithium5::verify(&pk, b"payload", &bad));
    }
}
