//! Kyber768 (NIST security level 3).
//!
//! Symmetric primitives: SHA-3/SHAKE.

use crate::params::kyber768::*;
use crate::symmetric::Shake;

crate::types::define_kyber_variant! {
    /// Kyber768 key encapsulation mechanism.
    ///
    /// Provides NIST Security Level 3.
    name: Kyber768,
    symmetric: Shake
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_sizes() {
        assert_eq!(Kyber768::ENCAPSULATION_KEY_SIZE, 1184);
        assert_eq!(Kyber768::DECAPSULATION_KEY_SIZE, 2400);
        assert_eq!(Kyber768::CIPHERTEXT_SIZE, 1088);
        assert_eq!(Kyber768::SHARED_SECRET_SIZE, 32);
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x38);
        let (dk, ek) = Kyber768::keygen(&mut rng).unwrap();
        let (ct, ss_sender) = Kyber768::encaps(&ek, &mut rng).unwrap();
        let ss_receiver = Kyber768::decaps(&dk, &ct).unwrap();
        assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
    }

    #[test]
    fn test_keygen_from_seed_matches_rng_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let (dk, ek) = Kyber768::keygen(&mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let mut d = [0u8; 32];
        let mut z = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rng, &mut d);
        rand::RngCore::fill_bytes(&mut rng, &mut z);
        let (dk2, ek2) = Kyber768::keygen_from_seed(&d, &z);

        assert_eq!(ek, ek2);
        assert_eq!(dk.as_bytes(), dk2.as_bytes());
        assert_eq!(&dk.as_bytes()[2400 - 32..], &z);
    }

    #[test]
    fn test_tampered_ciphertext_changes_secret() {
        let (dk, ek) = Kyber768::keygen_from_seed(&[3; 32], &[4; 32]);
        let (ct, ss) = Kyber768::encaps_from_seed(&ek, &[5; 32]);

        let mut bytes = ct.as_bytes().to_vec();
        bytes[1088 / 2] ^= 0x10;
        let tampered = Ciphertext::from_bytes(&bytes).unwrap();
        let ss_bad = Kyber768::decaps(&dk, &tampered).unwrap();
        assert_ne!(ss.as_ref(), ss_bad.as_ref());
    }

    #[test]
    fn test_from_bytes_length_checks() {
        let err = EncapsulationKey::from_bytes(&[0u8; 1183]).unwrap_err();
        assert_eq!(err, Error::InvalidKeyLength { expected: 1184, actual: 1183 });
        assert!(matches!(
            DecapsulationKey::from_bytes(&[0u8; 2401]),
            Err(Error::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            Ciphertext::from_bytes(&[]),
            Err(Error::InvalidCiphertextLength { expected: 1088, actual: 0 })
        ));
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let (dk, ek) = Kyber768::keygen_from_seed(&[8; 32], &[9; 32]);
        let ek2 = EncapsulationKey::from_bytes(ek.as_bytes()).unwrap();
        let dk2 = DecapsulationKey::from_bytes(dk.as_bytes()).unwrap();
        let (ct, ss) = Kyber768::encaps_from_seed(&ek2, &[1; 32]);
        let ct2 = Ciphertext::from_bytes(ct.as_bytes()).unwrap();
        assert_eq!(Kyber768::decaps(&dk2, &ct2).unwrap().as_ref(), ss.as_ref());
    }

    #[test]
    fn test_flipping_ciphertext_bit_zero_changes_secret() {
        let seed: [u8; 32] = core::array::from_fn(|i| i as u8);
        let (dk, ek) = Kyber768::keygen_from_seed(&seed, &[0xA5; 32]);
        let (ct, ss) = Kyber768::encaps_from_seed(&ek, &seed);

        let mut bytes = ct.as_bytes().to_vec();
        bytes[0] ^= 0x01;
        let tampered = Ciphertext::from_bytes(&bytes).unwrap();
        let ss_bad = Kyber768::decaps(&dk, &tampered).unwrap();

        assert_ne!(ss.as_ref(), ss_bad.as_ref());
        assert_eq!(
            Kyber768::decaps(&dk, &ct).unwrap().as_ref(),
            ss.as_ref()
        );
    }
}
