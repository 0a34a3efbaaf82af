use crate::config::AppConfig;
use crate::errors::{AppResult, TopicManagerError};
use crate::topic::{AdmissionReport, TspTopicManager};
use clap::Args;
use serde_json::{json, Value};
use tracing::info;

/// Identify admissible TSP outputs in a raw transaction
#[derive(Args)]
pub struct AdmitCommand {
    /// Consensus-encoded transaction (hex)
    pub raw_tx: String,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Show why each non-admitted output was skipped
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Protocol namespace address (overrides config.toml)
    #[arg(long)]
    pub protocol_address: Option<String>,
}

impl AdmitCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = super::load_config()?;
        println!("{}", self.render(&config));
        Ok(())
    }

    /// Command output for `config`, without the trailing newline
    pub fn render(&self, config: &AppConfig) -> String {
        let mut config = config.clone();
        if let Some(address) = &self.protocol_address {
            config.topic.protocol_address = address.clone();
        }

        let manager = TspTopicManager::from_config(&config);

        if !self.verbose {
            let admitted = manager.identify_admissible_outputs_from_hex(&self.raw_tx);
            return match self.format.as_str() {
                "json" => json!({ "admitted": admitted }).to_string(),
                _ => format!("Admissible outputs: {:?}", admitted),
            };
        }

        // Verbose mode surfaces the failure kinds the plain contract hides
        match manager.review_raw_transaction(&self.raw_tx) {
            Ok(report) => {
                info!("{}", report.summary());
                match self.format.as_str() {
                    "json" => report_json(&report).to_string(),
                    _ => report_text(&report),
                }
            }
            Err(e) => match self.format.as_str() {
                "json" => json!({ "admitted": [], "error": e.to_string() }).to_string(),
                _ => format!("Admissible outputs: []\nRejected: {}", e),
            },
        }
    }
}

fn report_text(report: &AdmissionReport) -> String {
    let mut lines = vec![format!("Admissible outputs: {:?}", report.admitted)];
    if report.is_empty() {
        lines.push(format!("Rejected: {}", TopicManagerError::NoValidAdvertisement));
    }
    for skipped in &report.skipped {
        lines.push(format!("  output {}: {}", skipped.index, skipped.reason));
    }
    lines.join("\n")
}

fn report_json(report: &AdmissionReport) -> Value {
    let skipped: Vec<_> = report
        .skipped
        .iter()
        .map(|s| json!({ "index": s.index, "reason": s.reason.to_string() }))
        .collect();

    json!({ "admitted": report.admitted, "skipped": skipped })
}
