/// Data recovered from a PushDrop locking script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushDropRecord {
    /// Data fields in push order, signature excluded
    pub fields: Vec<Vec<u8>>,
    /// Hex-encoded signature taken from the last data push
    pub signature: String,
    /// Hex-encoded public key the output is locked to
    pub locking_public_key: String,
}

impl PushDropRecord {
    /// Field at `index`, if present
    pub fn field(&self, index: usize) -> Option<&[u8]> {
        self.fields.get(index).map(Vec::as_slice)
    }

    /// All fields joined end to end, the message the signature commits to
    pub fn concatenated_fields(&self) -> Vec<u8> {
        self.fields.concat()
    }

    /// Field rendered as UTF-8 text, lossy for non-text bytes
    pub fn field_text(&self, index: usize) -> Option<String> {
        self.field(index)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}
