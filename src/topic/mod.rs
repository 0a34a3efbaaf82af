//! TSP topic manager
//!
//! Decides which outputs of a transaction are TSP advertisements an overlay
//! node should admit into the topic. An output is admissible when:
//!
//! 1. its locking script decodes as a PushDrop token,
//! 2. the namespace field equals the protocol address byte-for-byte,
//! 3. the token signature verifies over SHA-256 of the concatenated fields
//!    using the token's locking public key.
//!
//! [`TopicManager::identify_admissible_outputs`] never fails: malformed
//! transactions and transactions without advertisements both yield an empty
//! list. [`TspTopicManager::try_identify_admissible_outputs`] and
//! [`TspTopicManager::review_outputs`] expose the distinct failure kinds and
//! per-output skip reasons for callers that need them.

use crate::config::{AppConfig, TopicConfig};
use crate::crypto::{sha256_digest, EcdsaVerifier, SignatureVerifier};
use crate::errors::{AppResult, TopicManagerError};
use crate::pushdrop::{PushDropDecoder, ScriptDecoder};
use bitcoin::{Script, Transaction};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod report;

pub use report::{AdmissionReport, SkipReason, SkippedOutput};

/// Host-facing topic manager interface
pub trait TopicManager {
    /// Indices of admissible outputs; empty on any failure
    fn identify_admissible_outputs(&self, tx: &Transaction) -> Vec<usize>;

    /// Documentation describing the topic
    fn get_documentation(&self) -> AppResult<String>;
}

/// Topic manager for TSP advertisements
#[derive(Debug, Clone)]
pub struct TspTopicManager<D = PushDropDecoder, V = EcdsaVerifier> {
    decoder: D,
    verifier: V,
    topic: TopicConfig,
    documentation_path: PathBuf,
}

impl TspTopicManager {
    /// Create a topic manager with the built-in protocol address and field layout
    ///
    /// Neither config.toml nor the environment is consulted; use
    /// [`TspTopicManager::from_config`] to apply overrides.
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_capabilities(PushDropDecoder, EcdsaVerifier::new(), config)
    }
}

impl Default for TspTopicManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ScriptDecoder, V: SignatureVerifier> TspTopicManager<D, V> {
    /// Create a topic manager around caller-supplied decoding and verification
    pub fn with_capabilities(decoder: D, verifier: V, config: &AppConfig) -> Self {
        Self {
            decoder,
            verifier,
            topic: config.topic.clone(),
            documentation_path: config.documentation.path.clone(),
        }
    }

    pub fn documentation_path(&self) -> &Path {
        &self.documentation_path
    }

    /// Review every output, recording admissions and skip reasons
    ///
    /// Fails only on the transaction-level preconditions; an empty
    /// `admitted` list is a valid outcome here.
    pub fn review_outputs(&self, tx: &Transaction) -> AppResult<AdmissionReport> {
        if tx.input.is_empty() {
            return Err(TopicManagerError::InputsRequired);
        }
        if tx.output.is_empty() {
            return Err(TopicManagerError::OutputsRequired);
        }

        let mut report = AdmissionReport::new();

        for (index, output) in tx.output.iter().enumerate() {
            match self.check_output(&output.script_pubkey) {
                Ok(()) => {
                    debug!("Output {} admitted as TSP advertisement", index);
                    report.admit(index);
                }
                Err(reason) => {
                    // Not an advertisement; logged and otherwise ignored
                    debug!("Output {} skipped: {}", index, reason);
                    report.skip(index, reason);
                }
            }
        }

        info!(
            "Reviewed transaction {}: {}",
            tx.compute_txid(),
            report.summary()
        );

        Ok(report)
    }

    /// Review a consensus-encoded transaction given as hex
    pub fn review_raw_transaction(&self, raw_tx_hex: &str) -> AppResult<AdmissionReport> {
        let tx = parse_transaction(raw_tx_hex)?;
        self.review_outputs(&tx)
    }

    /// Admissible output indices, or the reason there are none
    pub fn try_identify_admissible_outputs(&self, tx: &Transaction) -> AppResult<Vec<usize>> {
        let report = self.review_outputs(tx)?;
        if report.is_empty() {
            return Err(TopicManagerError::NoValidAdvertisement);
        }
        Ok(report.admitted)
    }

    /// Same contract as [`TopicManager::identify_admissible_outputs`] for a hex transaction
    pub fn identify_admissible_outputs_from_hex(&self, raw_tx_hex: &str) -> Vec<usize> {
        match parse_transaction(raw_tx_hex) {
            Ok(tx) => self.admissible_or_empty(&tx),
            Err(e) => {
                warn!("Rejecting unparseable transaction: {}", e);
                Vec::new()
            }
        }
    }

    fn admissible_or_empty(&self, tx: &Transaction) -> Vec<usize> {
        match self.try_identify_admissible_outputs(tx) {
            Ok(outputs) => outputs,
            Err(TopicManagerError::NoValidAdvertisement) => {
                debug!("{}", TopicManagerError::NoValidAdvertisement);
                Vec::new()
            }
            Err(e) => {
                warn!("Rejecting transaction: {}", e);
                Vec::new()
            }
        }
    }

    fn check_output(&self, script: &Script) -> Result<(), SkipReason> {
        let record = self.decoder.decode(script)?;

        let namespace = record.field(self.topic.namespace_field);
        if namespace != Some(self.topic.protocol_address.as_bytes()) {
            return Err(SkipReason::NamespaceMismatch {
                found: namespace.map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
            });
        }

        let digest = sha256_digest(&record.concatenated_fields());
        self.verifier
            .verify(&digest, &record.signature, &record.locking_public_key)?;

        Ok(())
    }
}

impl<D: ScriptDecoder, V: SignatureVerifier> TopicManager for TspTopicManager<D, V> {
    fn identify_admissible_outputs(&self, tx: &Transaction) -> Vec<usize> {
        self.admissible_or_empty(tx)
    }

    fn get_documentation(&self) -> AppResult<String> {
        Ok(std::fs::read_to_string(&self.documentation_path)?)
    }
}

fn parse_transaction(raw_tx_hex: &str) -> AppResult<Transaction> {
    let bytes = hex::decode(raw_tx_hex.trim())?;
    Ok(bitcoin::consensus::deserialize(&bytes)?)
}
