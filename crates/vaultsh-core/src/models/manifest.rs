//! Seed manifest types.
//!
//! A manifest describes the whole initial hierarchy as nested JSON. Nodes
//! are tagged with `"type": "directory"` or `"type": "file"`; visibility
//! defaults to `true`.

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Root manifest structure (the root directory's children).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Manifest {
    pub children: Vec<ManifestNode>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A directory or file entry in the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode {
    Directory(DirectoryEntry),
    File(FileEntry),
}

/// Directory entry from the manifest
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<ManifestNode>,
}

/// File entry from the manifest
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Password protection (None = plain file)
    #[serde(default)]
    pub lock: Option<LockEntry>,
}

/// Password protection for a file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LockEntry {
    /// Hex-encoded SHA-256 digest of the password
    pub secret_sha256: String,
    /// Hints handed out in order
    #[serde(default)]
    pub hints: Vec<String>,
}

fn visible_by_default() -> bool {
    true
}
