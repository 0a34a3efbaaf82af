//! Tempo Song Protocol (TSP) token layout
//!
//! A TSP advertisement is a PushDrop token whose decoded data fields follow a
//! fixed order. The locking key and `OP_CHECKSIG` precede the fields in the
//! script and the signature is the last push, so neither appears here.

use crate::pushdrop::PushDropRecord;
use serde::Serialize;

/// Protocol namespace address every TSP advertisement must carry
pub const TSP_PROTOCOL_ADDRESS: &str = "1LQtKKK7c1TN3UcRfsp8SqGjWtzGskze36";

/// Decoded field positions of a TSP advertisement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TspField {
    PublicKey = 0,
    ProtocolAddress = 1,
    Title = 2,
    Artist = 3,
    Description = 4,
    Duration = 5,
    SongUrl = 6,
    ArtworkUrl = 7,
}

impl TspField {
    pub const ALL: [TspField; 8] = [
        TspField::PublicKey,
        TspField::ProtocolAddress,
        TspField::Title,
        TspField::Artist,
        TspField::Description,
        TspField::Duration,
        TspField::SongUrl,
        TspField::ArtworkUrl,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            TspField::PublicKey => "public_key",
            TspField::ProtocolAddress => "protocol_address",
            TspField::Title => "title",
            TspField::Artist => "artist",
            TspField::Description => "description",
            TspField::Duration => "duration",
            TspField::SongUrl => "song_url",
            TspField::ArtworkUrl => "artwork_url",
        }
    }
}

/// Human-readable view of a decoded TSP advertisement
///
/// Missing fields are left empty; this is a display type and performs no
/// validation of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TspAdvertisement {
    pub public_key: String,
    pub protocol_address: String,
    pub title: String,
    pub artist: String,
    pub description: String,
    pub duration: String,
    pub song_url: String,
    pub artwork_url: String,
    pub signature: String,
    pub locking_public_key: String,
}

impl From<&PushDropRecord> for TspAdvertisement {
    fn from(record: &PushDropRecord) -> Self {
        let text = |field: TspField| record.field_text(field.index()).unwrap_or_default();

        Self {
            public_key: record
                .field(TspField::PublicKey.index())
                .map(hex::encode)
                .unwrap_or_default(),
            protocol_address: text(TspField::ProtocolAddress),
            title: text(TspField::Title),
            artist: text(TspField::Artist),
            description: text(TspField::Description),
            duration: text(TspField::Duration),
            song_url: text(TspField::SongUrl),
            artwork_url: text(TspField::ArtworkUrl),
            signature: record.signature.clone(),
            locking_public_key: record.locking_public_key.clone(),
        }
    }
}
