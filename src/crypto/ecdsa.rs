//! ECDSA verification over secp256k1 for PushDrop token signatures
//!
//! Signatures arrive as hex-encoded DER, public keys as hex-encoded SEC1
//! (compressed or uncompressed). High-S signatures are normalised before
//! verification and are therefore accepted.
//!
//! # Usage
//!
//! ```rust
//! use tsp_topic_manager::crypto::{ecdsa::EcdsaVerifier, sha256_digest, SignatureVerifier};
//!
//! let verifier = EcdsaVerifier::default();
//! let digest = sha256_digest(b"payload");
//! assert!(verifier.verify(&digest, "00", "02").is_err());
//! ```

use super::SignatureVerifier;
use crate::errors::VerifyError;
use bitcoin::secp256k1::ecdsa::Signature;
use bitcoin::secp256k1::{Message, PublicKey, Secp256k1, VerifyOnly};

/// secp256k1 ECDSA verifier
#[derive(Debug, Clone)]
pub struct EcdsaVerifier {
    secp: Secp256k1<VerifyOnly>,
}

impl EcdsaVerifier {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::verification_only(),
        }
    }
}

impl Default for EcdsaVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureVerifier for EcdsaVerifier {
    fn verify(
        &self,
        digest: &[u8; 32],
        signature_hex: &str,
        public_key_hex: &str,
    ) -> Result<(), VerifyError> {
        let mut signature = parse_signature(signature_hex)?;
        signature.normalize_s();

        let public_key = parse_public_key(public_key_hex)?;
        let message = Message::from_digest(*digest);

        self.secp
            .verify_ecdsa(&message, &signature, &public_key)
            .map_err(|_| VerifyError::SignatureMismatch)
    }
}

/// Parse a DER signature, falling back to lax DER for non-canonical encodings
fn parse_signature(signature_hex: &str) -> Result<Signature, VerifyError> {
    let bytes = hex::decode(signature_hex)
        .map_err(|e| VerifyError::InvalidSignatureEncoding(format!("Invalid hex: {}", e)))?;

    Signature::from_der(&bytes)
        .or_else(|_| Signature::from_der_lax(&bytes))
        .map_err(|e| VerifyError::InvalidSignatureEncoding(e.to_string()))
}

fn parse_public_key(public_key_hex: &str) -> Result<PublicKey, VerifyError> {
    let bytes = hex::decode(public_key_hex)
        .map_err(|e| VerifyError::InvalidPublicKey(format!("Invalid hex: {}", e)))?;

    PublicKey::from_slice(&bytes).map_err(|e| VerifyError::InvalidPublicKey(e.to_string()))
}
