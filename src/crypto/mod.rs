//! Cryptographic capabilities used to validate TSP advertisements
//!
//! The filter only needs two primitives: a SHA-256 digest over the token
//! fields and an ECDSA check of the embedded signature. Verification sits
//! behind [`SignatureVerifier`] so the filter can run against test doubles.

pub mod ecdsa;

use crate::errors::VerifyError;
use sha2::{Digest, Sha256};

pub use ecdsa::EcdsaVerifier;

/// Capability: check a signature over a 32-byte digest
pub trait SignatureVerifier {
    fn verify(
        &self,
        digest: &[u8; 32],
        signature_hex: &str,
        public_key_hex: &str,
    ) -> Result<(), VerifyError>;
}

/// Single SHA-256 of `data`
pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
