//! Cryptographic primitives consumed by the validators.
//!
//! Signature verification and hashing are external collaborators. They sit
//! behind [`SignatureVerifier`] and [`MessageDigest`] so the validation
//! cascade never depends on a concrete algorithm.

use ed25519_dalek::{Signature, VerifyingKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Checks that a signature authentically covers a message under an identity.
pub trait SignatureVerifier: Send + Sync {
    /// Returns `true` iff `signature` covers `message` under `identity`'s key.
    ///
    /// Malformed identities or signatures must return `false`, never panic.
    fn verify(&self, identity: &str, message: &[u8], signature: &str) -> bool;
}

/// Deterministic fixed-length digest rendered as lowercase hex.
pub trait MessageDigest: Send + Sync {
    fn digest_hex(&self, message: &[u8]) -> String;
}

/// Ed25519 verification over hex-encoded public keys and signatures.
///
/// Uses strict verification: small-order keys, small-order `R` and
/// non-canonical `S` are all rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    fn decode_key(identity: &str) -> Option<VerifyingKey> {
        let bytes: [u8; 32] = hex::decode(identity).ok()?.try_into().ok()?;
        VerifyingKey::from_bytes(&bytes).ok()
    }

    fn decode_signature(signature: &str) -> Option<Signature> {
        let bytes: [u8; 64] = hex::decode(signature).ok()?.try_into().ok()?;
        Some(Signature::from_bytes(&bytes))
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, identity: &str, message: &[u8], signature: &str) -> bool {
        let (Some(key), Some(sig)) = (Self::decode_key(identity), Self::decode_signature(signature))
        else {
            return false;
        };
        key.verify_strict(message, &sig).is_ok()
    }
}

/// SHA-256, the digest used by existing ledgers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl MessageDigest for Sha256Digest {
    fn digest_hex(&self, message: &[u8]) -> String {
        hex::encode(Sha256::digest(message))
    }
}

/// BLAKE3 with 32-byte output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Digest;

impl MessageDigest for Blake3Digest {
    fn digest_hex(&self, message: &[u8]) -> String {
        blake3::hash(message).to_hex().to_string()
    }
}

/// Selects a digest by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl MessageDigest for DigestAlgorithm {
    fn digest_hex(&self, message: &[u8]) -> String {
        match self {
            DigestAlgorithm::Sha256 => Sha256Digest.digest_hex(message),
            DigestAlgorithm::Blake3 => Blake3Digest.digest_hex(message),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Sha256 => write!(f, "sha256"),
            DigestAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}
