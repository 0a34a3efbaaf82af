use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::pushdrop;
use crate::types::tsp::TspAdvertisement;
use clap::Args;
use serde_json::json;
use tracing::info;

/// Decode a PushDrop locking script and show its TSP fields
#[derive(Args)]
pub struct InspectCommand {
    /// Locking script (hex)
    pub script: String,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl InspectCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = super::load_config()?;
        println!("{}", self.render(&config)?);
        Ok(())
    }

    /// Command output for `config`; fails when the script is not a PushDrop token
    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        let record = pushdrop::decode_hex(self.script.trim())?;
        info!("Decoded PushDrop token with {} fields", record.fields.len());

        let advert = TspAdvertisement::from(&record);
        let namespace_matches = record.field(config.topic.namespace_field)
            == Some(config.topic.protocol_address.as_bytes());

        Ok(match self.format.as_str() {
            "json" => json!({
                "advertisement": advert,
                "field_count": record.fields.len(),
                "namespace_matches": namespace_matches,
            })
            .to_string(),
            _ => advert_text(&advert, record.fields.len(), namespace_matches),
        })
    }
}

fn advert_text(advert: &TspAdvertisement, field_count: usize, namespace_matches: bool) -> String {
    [
        "=== PushDrop Token ===".to_string(),
        format!("Locking key:  {}", advert.locking_public_key),
        format!("Fields:       {}", field_count),
        String::new(),
        format!("Public key:   {}", advert.public_key),
        format!(
            "Namespace:    {} ({})",
            advert.protocol_address,
            if namespace_matches { "TSP" } else { "not TSP" }
        ),
        format!("Title:        {}", advert.title),
        format!("Artist:       {}", advert.artist),
        format!("Description:  {}", advert.description),
        format!("Duration:     {}", advert.duration),
        format!("Song URL:     {}", advert.song_url),
        format!("Artwork URL:  {}", advert.artwork_url),
        String::new(),
        format!("Signature:    {}", advert.signature),
    ]
    .join("\n")
}
