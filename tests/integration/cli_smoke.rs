//! CLI Smoke Test
//!
//! Runs each command over the signed advertisement fixtures and checks the
//! text and JSON output they would print.

use crate::common::fixtures::*;
use serde_json::Value;
use tempfile::TempDir;
use tsp_topic_manager::cli::commands::admit::AdmitCommand;
use tsp_topic_manager::cli::commands::docs::DocsCommand;
use tsp_topic_manager::cli::commands::inspect::InspectCommand;
use tsp_topic_manager::config::AppConfig;
use tsp_topic_manager::errors::{DecodeError, TopicManagerError};
use tsp_topic_manager::types::tsp::{TspField, TSP_PROTOCOL_ADDRESS};

fn advert_transaction_hex() -> String {
    let tx = transaction_with_outputs(vec![signed_advert_script(), p2pkh_script()]);
    bitcoin::consensus::encode::serialize_hex(&tx)
}

fn admit(raw_tx: String, format: &str, verbose: bool) -> AdmitCommand {
    AdmitCommand {
        raw_tx,
        format: format.to_string(),
        verbose,
        protocol_address: None,
    }
}

#[test]
fn test_admit_text() {
    let output = admit(advert_transaction_hex(), "text", false).render(&AppConfig::default());
    assert_eq!(output, "Admissible outputs: [0]");
}

#[test]
fn test_admit_json() -> anyhow::Result<()> {
    let output = admit(advert_transaction_hex(), "json", false).render(&AppConfig::default());
    let json: Value = serde_json::from_str(&output)?;
    assert_eq!(json["admitted"], serde_json::json!([0]));
    Ok(())
}

#[test]
fn test_admit_verbose_lists_skipped_outputs() -> anyhow::Result<()> {
    let text = admit(advert_transaction_hex(), "text", true).render(&AppConfig::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Admissible outputs: [0]");
    assert!(lines[1].starts_with("  output 1: "));

    let output = admit(advert_transaction_hex(), "json", true).render(&AppConfig::default());
    let json: Value = serde_json::from_str(&output)?;
    assert_eq!(json["admitted"], serde_json::json!([0]));
    assert_eq!(json["skipped"][0]["index"], 1);
    assert!(json["skipped"][0]["reason"].is_string());
    Ok(())
}

#[test]
fn test_admit_verbose_reports_rejection() -> anyhow::Result<()> {
    let tx = transaction(0, vec![signed_advert_script()]);
    let raw = bitcoin::consensus::encode::serialize_hex(&tx);

    let text = admit(raw.clone(), "text", true).render(&AppConfig::default());
    assert_eq!(
        text,
        format!(
            "Admissible outputs: []\nRejected: {}",
            TopicManagerError::InputsRequired
        )
    );

    let json: Value = serde_json::from_str(&admit(raw, "json", true).render(&AppConfig::default()))?;
    assert_eq!(json["admitted"], serde_json::json!([]));
    assert_eq!(json["error"], TopicManagerError::InputsRequired.to_string());
    Ok(())
}

#[test]
fn test_admit_protocol_address_flag() {
    let foreign = resigned_advert_script(TspField::ProtocolAddress, b"1NotTSP");
    let tx = transaction_with_outputs(vec![signed_advert_script(), foreign]);

    let mut command = admit(bitcoin::consensus::encode::serialize_hex(&tx), "text", false);
    command.protocol_address = Some("1NotTSP".to_string());
    assert_eq!(command.render(&AppConfig::default()), "Admissible outputs: [1]");
}

#[test]
fn test_inspect_text() -> anyhow::Result<()> {
    let command = InspectCommand {
        script: hex::encode(signed_advert_script().as_bytes()),
        format: "text".to_string(),
    };
    let output = command.render(&AppConfig::default())?;

    assert!(output.starts_with("=== PushDrop Token ==="));
    assert!(output.contains("Fields:       8"));
    assert!(output.contains(&format!("Namespace:    {} (TSP)", TSP_PROTOCOL_ADDRESS)));
    assert!(output.contains("Title:        Night Drive"));
    assert!(output.contains("Artist:       The Overlays"));
    Ok(())
}

#[test]
fn test_inspect_json() -> anyhow::Result<()> {
    let command = InspectCommand {
        script: hex::encode(resigned_advert_script(TspField::ProtocolAddress, b"1NotTSP").as_bytes()),
        format: "json".to_string(),
    };
    let json: Value = serde_json::from_str(&command.render(&AppConfig::default())?)?;

    assert_eq!(json["field_count"], 8);
    assert_eq!(json["namespace_matches"], false);
    assert_eq!(json["advertisement"]["protocol_address"], "1NotTSP");
    assert_eq!(json["advertisement"]["duration"], "215");
    assert_eq!(
        json["advertisement"]["public_key"],
        hex::encode(advertiser_public_key().serialize())
    );
    Ok(())
}

#[test]
fn test_inspect_rejects_non_token_script() {
    let command = InspectCommand {
        script: hex::encode(p2pkh_script().as_bytes()),
        format: "text".to_string(),
    };
    assert!(matches!(
        command.render(&AppConfig::default()),
        Err(TopicManagerError::Decoder(DecodeError::MissingLockingKey))
    ));
}

#[test]
fn test_docs_reads_path_flag() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let doc_path = temp_dir.path().join("TSP.md");
    std::fs::write(&doc_path, "# Tempo Song Protocol\n")?;

    let command = DocsCommand {
        path: Some(doc_path),
    };
    assert_eq!(command.render(&AppConfig::default())?, "# Tempo Song Protocol\n");

    let missing = DocsCommand {
        path: Some(temp_dir.path().join("missing.md")),
    };
    assert!(matches!(
        missing.render(&AppConfig::default()),
        Err(TopicManagerError::Io(_))
    ));
    Ok(())
}
