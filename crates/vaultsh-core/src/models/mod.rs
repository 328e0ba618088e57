//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`Node`], [`File`], [`Directory`], [`Lock`] - Virtual filesystem representation
//! - [`Manifest`] - Seed description the tree is built from
//! - [`OutputLine`] - Terminal output types

mod filesystem;
mod manifest;
mod terminal;

pub use filesystem::{Directory, File, HintOutcome, Lock, LockState, Node, UnlockOutcome};
pub use manifest::{DirectoryEntry, FileEntry, LockEntry, Manifest, ManifestNode};
pub use terminal::OutputLine;
