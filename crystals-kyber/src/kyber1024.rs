//! Kyber1024 (NIST security level 5).
//!
//! Symmetric primitives: SHA-3/SHAKE.

use crate::params::kyber1024::*;
use crate::symmetric::Shake;

crate::types::define_kyber_variant! {
    /// Kyber1024 key encapsulation mechanism.
    ///
    /// Provides NIST Security Level 5.
    name: Kyber1024,
    symmetric: Shake
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_sizes() {
        assert_eq!(Kyber1024::ENCAPSULATION_KEY_SIZE, 1568);
        assert_eq!(Kyber1024::DECAPSULATION_KEY_SIZE, 3168);
        assert_eq!(Kyber1024::CIPHERTEXT_SIZE, 1568);
        assert_eq!(Kyber1024::SHARED_SECRET_SIZE, 32);
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x59);
        let (dk, ek) = Kyber1024::keygen(&mut rng).unwrap();
        let (ct, ss_sender) = Kyber1024::encaps(&ek, &mut rng).unwrap();
        let ss_receiver = Kyber1024::decaps(&dk, &ct).unwrap();
        assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
    }

    #[test]
    fn test_keygen_from_seed_matches_rng_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let (dk, ek) = Kyber1024::keygen(&mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let mut d = [0u8; 32];
        let mut z = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rng, &mut d);
        rand::RngCore::fill_bytes(&mut rng, &mut z);
        let (dk2, ek2) = Kyber1024::keygen_from_seed(&d, &z);

        assert_eq!(ek, ek2);
        assert_eq!(dk.as_bytes(), dk2.as_bytes());
        assert_eq!(&dk.as_bytes()[3168 - 32..], &z);
    }

    #[test]
    fn test_tampered_ciphertext_changes_secret() {
        let (dk, ek) = Kyber1024::keygen_from_seed(&[3; 32], &[4; 32]);
        let (ct, ss) = Kyber1024::encaps_from_seed(&ek, &[5; 32]);

        let mut bytes = ct.as_bytes().to_vec();
        bytes[1568 / 2] ^= 0x10;
        let tampered = Ciphertext::from_bytes(&bytes).unwrap();
        let ss_bad = Kyber1024::decaps(&dk, &tampered).unwrap();
        assert_ne!(ss.as_ref(), ss_bad.as_ref());
    }

    #[test]
    fn test_from_bytes_length_checks() {
        let err = EncapsulationKey::from_bytes(&[0u8; 1567]).unwrap_err();
        assert_eq!(err, Error::InvalidKeyLength { expected: 1568, actual: 1567 });
        assert!(matches!(
            DecapsulationKey::from_bytes(&[0u8; 3169]),
            Err(Error::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            Ciphertext::from_bytes(&[]),
            Err(Error::InvalidCiphertextLength { expected: 1568, actual: 0 })
        ));
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let (dk, ek) = Kyber1024::keygen_from_seed(&[8; 32], &[9; 32]);
        let ek2 = EncapsulationKey::from_bytes(ek.as_bytes()).unwrap();
        let dk2 = DecapsulationKey::from_bytes(dk.as_bytes()).unwrap();
        let (ct, ss) = Kyber1024::encaps_from_seed(&ek2, &[1; 32]);
        let ct2 = Ciphertext::from_bytes(ct.as_bytes()).unwrap();
        assert_eq!(Kyber1024::decaps(&dk2, &ct2).unwrap().as_ref(), ss.as_ref());
    }
}
