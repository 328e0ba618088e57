use tracing::{debug, info};

use crate::config::{ROOT_NAME, SEED_MANIFEST};
use crate::error::{ManifestError, ShellError};
use crate::models::{
    Directory, DirectoryEntry, File, FileEntry, HintOutcome, Lock, LockState, Manifest,
    ManifestNode, Node, UnlockOutcome,
};

/// Result of a successful `cd`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CdOutcome {
    /// `..` at the root; nothing changed.
    AlreadyAtRoot,
    /// Popped one level; carries the new current path.
    MovedUp(String),
    /// Entered a child directory; carries its name.
    Entered(String),
}

/// The in-memory filesystem plus the current location.
///
/// The cursor is stored as the stack of directory names descended from the
/// root, so the stack is always exactly the path back to the root.
///
/// # Path Convention
///
/// - Root: empty stack, displayed as `/`
/// - Nested: `["communications"]`, displayed as `/communications`
#[derive(Clone, Debug)]
pub struct Tree {
    root: Directory,
    path: Vec<String>,
}

impl Tree {
    /// Create a tree positioned at `root`.
    pub fn new(root: Directory) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    /// Build the default hierarchy every session starts with.
    pub fn seeded() -> Result<Self, ManifestError> {
        let manifest = Manifest::from_json(SEED_MANIFEST)?;
        Self::from_manifest(&manifest)
    }

    /// Create a tree from a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        let mut root = Directory::new(ROOT_NAME);
        for node in &manifest.children {
            root.add_child(Self::build_node(node)?)?;
        }
        Ok(Self::new(root))
    }

    fn build_node(node: &ManifestNode) -> Result<Node, ManifestError> {
        match node {
            ManifestNode::Directory(entry) => Ok(Self::build_directory(entry)?.into()),
            ManifestNode::File(entry) => Ok(Self::build_file(entry)?.into()),
        }
    }

    fn build_directory(entry: &DirectoryEntry) -> Result<Directory, ManifestError> {
        let mut dir = Directory::new(&entry.name).with_visibility(entry.visible);
        for child in &entry.children {
            dir.add_child(Self::build_node(child)?)?;
        }
        Ok(dir)
    }

    fn build_file(entry: &FileEntry) -> Result<File, ManifestError> {
        let file = File::new(&entry.name, &entry.content).with_visibility(entry.visible);
        match &entry.lock {
            Some(lock) => {
                let lock = Lock::from_digest(&lock.secret_sha256, lock.hints.clone())
                    .ok_or_else(|| ManifestError::InvalidDigest(entry.name.clone()))?;
                Ok(file.with_lock(lock))
            }
            None => Ok(file),
        }
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// The directory the user is currently in.
    pub fn cursor(&self) -> &Directory {
        let mut current = &self.root;
        for name in &self.path {
            match current.subdirectory(name) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    fn cursor_mut(&mut self) -> Option<&mut Directory> {
        let mut current = &mut self.root;
        for name in &self.path {
            current = current.subdirectory_mut(name)?;
        }
        Some(current)
    }

    /// Number of directories between the root and the cursor.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Absolute display path of the cursor (`/` at the root).
    pub fn current_path(&self) -> String {
        if self.path.is_empty() {
            return ROOT_NAME.to_string();
        }
        format!("/{}", self.path.join("/"))
    }

    /// Move into a child directory, or up one level with `..`.
    ///
    /// Files and missing names both yield [`ShellError::NotFound`].
    pub fn change_directory(&mut self, target: &str) -> Result<CdOutcome, ShellError> {
        if target == ".." {
            return Ok(match self.path.pop() {
                Some(left) => {
                    debug!(from = %left, to = %self.current_path(), "moved up");
                    CdOutcome::MovedUp(self.current_path())
                }
                None => CdOutcome::AlreadyAtRoot,
            });
        }

        if self.cursor().subdirectory(target).is_none() {
            return Err(ShellError::NotFound(target.to_string()));
        }
        self.path.push(target.to_string());
        debug!(path = %self.current_path(), "entered directory");
        Ok(CdOutcome::Entered(target.to_string()))
    }

    /// Names of the visible entries under the cursor.
    pub fn list(&self) -> Vec<&str> {
        self.cursor().list()
    }

    /// Read a file under the cursor.
    ///
    /// Directories and missing names both yield [`ShellError::NotFound`].
    pub fn read_file(&self, name: &str) -> Result<&str, ShellError> {
        match self.cursor().child(name)? {
            Node::File(file) => file.read(),
            Node::Directory(_) => Err(ShellError::NotFound(name.to_string())),
        }
    }

    /// Lock state of a protected file under the cursor.
    pub fn lock_state(&self, name: &str) -> Result<LockState, ShellError> {
        match self.cursor().child(name) {
            Ok(Node::File(file)) => file
                .lock()
                .map(Lock::state)
                .ok_or_else(|| ShellError::NotUnlockable(name.to_string())),
            _ => Err(ShellError::NotUnlockable(name.to_string())),
        }
    }

    /// Try a password against a protected file under the cursor.
    pub fn decode(&mut self, name: &str, candidate: &str) -> Result<UnlockOutcome, ShellError> {
        let outcome = self.lockable_mut(name)?.attempt_unlock(candidate);
        match &outcome {
            Ok(UnlockOutcome::Unlocked) => info!(file = name, "file unlocked"),
            Ok(UnlockOutcome::AlreadyUnlocked) => debug!(file = name, "file already unlocked"),
            Err(_) => debug!(file = name, "unlock attempt rejected"),
        }
        outcome
    }

    /// Next hint for a protected file under the cursor.
    pub fn hint(&mut self, name: &str) -> Result<HintOutcome<'_>, ShellError> {
        self.lockable_mut(name)?.next_hint()
    }

    fn lockable_mut(&mut self, name: &str) -> Result<&mut File, ShellError> {
        let not_unlockable = || ShellError::NotUnlockable(name.to_string());
        match self.cursor_mut().ok_or_else(not_unlockable)?.child_mut(name) {
            Ok(Node::File(file)) if file.lock().is_some() => Ok(file),
            _ => Err(not_unlockable()),
        }
    }
}
