use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SIZE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Render a byte count as "1.5 kB", "12 MB", "512 B".
///
/// Uses 1024 steps and at most two decimals with trailing zeros dropped.
pub fn human_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// A file picked by the user, held in memory until the form is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    #[serde(serialize_with = "encode_bytes", deserialize_with = "decode_bytes")]
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn size_label(&self) -> String {
        human_file_size(self.size())
    }
}

fn encode_bytes<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
}

fn decode_bytes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(serde::de::Error::custom)
}

/// The single-file slot behind a file attachment control.
///
/// `generation` changes on every removal; the control keys its native input
/// on it so a fresh, empty input replaces the old one and picking the same
/// file again fires a change event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSlot {
    file: Option<FileUpload>,
    generation: u64,
}

impl FileSlot {
    pub fn file(&self) -> Option<&FileUpload> {
        self.file.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none()
    }

    /// Value reported to the owner after each transition.
    pub fn selection(&self) -> Option<FileUpload> {
        self.file.clone()
    }

    /// Store a selection, replacing any previous one.
    pub fn select(&mut self, file: FileUpload) {
        self.file = Some(file);
    }

    /// Clear the selection and retire the current native input.
    pub fn remove(&mut self) -> Option<FileUpload> {
        self.generation += 1;
        self.file.take()
    }

    pub fn input_key(&self) -> String {
        format!("file-input-{}", self.generation)
    }
}
