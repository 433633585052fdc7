//! # crystals
//!
//! Post-quantum lattice cryptography from the CRYSTALS suite, round-3
//! versions: the Kyber key encapsulation mechanism and the Dilithium
//! signature scheme, each with SHAKE and AES parameter sets.
//!
//! ## Features
//!
//! - `std` (default): Enable standard library support
//! - `kyber` (default): Enable CRYSTALS-Kyber
//! - `dilithium` (default): Enable CRYSTALS-Dilithium
//! - `tracing`: Emit `tracing` events from both schemes
//!
//! ## Example
//!
//! ```ignore
//! use crystals::kyber::{Kyber768, Kem};
//! use crystals::dilithium::{Dilithium3, Signer};
//!
//! let (dk, ek) = Kyber768::keygen(&mut rng)?;
//! let (ct, ss_sender) = Kyber768::encaps(&ek, &mut rng)?;
//! let ss_receiver = Kyber768::decaps(&dk, &ct)?;
//! assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
//!
//! let (sk, pk) = Dilithium3::keygen(&mut rng)?;
//! let sig = Dilithium3::sign(&sk, b"message")?;
//! assert!(Dilithium3::verify(&pk, b"message", &sig));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use crystals_core::{Error, Result};

/// Core traits for cryptographic primitives.
pub mod traits {
    pub use crystals_core::{Kem, Signer};
}

/// CRYSTALS-Kyber key encapsulation mechanism.
#[cfg(feature = "kyber")]
pub mod kyber {
    pub use crystals_core::Kem;
    pub use crystals_kyber::*;
}

/// CRYSTALS-Dilithium signature scheme.
#[cfg(feature = "dilithium")]
pub mod dilithium {
    pub use crystals_core::Signer;
    pub use crystals_dilithium::*;
}

#[cfg(all(test, feature = "kyber", feature = "dilithium"))]
mod tests {
    use super::dilithium::{Dilithium2, Signer};
    use super::kyber::{Kem, Kyber512};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_facade_reexports() {
        let mut rng = StdRng::seed_from_u64(0);
        let (dk, ek) = Kyber512::keygen(&mut rng).unwrap();
        let (ct, ss) = Kyber512::encaps(&ek, &mut rng).unwrap();
        assert_eq!(Kyber512::decaps(&dk, &ct).unwrap().as_ref(), ss.as_ref());

        let (sk, pk) = Dilithium2::keygen(&mut rng).unwrap();
        let sig = Dilithium2::sign(&sk, b"facade").unwrap();
        assert!(Dilithium2::verify(&pk, b"facade", &sig));
    }

    #[test]
    fn test_parameter_sets_by_name() {
        let kem: super::kyber::ParameterSet = "KYBER1024".parse().unwrap();
        let sig: super::dilithium::ParameterSet = "DILITHIUM5-AES".parse().unwrap();
        assert_eq!(kem.public_key_bytes(), 1568);
        assert_eq!(sig.signature_bytes(), 4595);
    }
}
