use sha2::{Digest, Sha256};

use crate::error::ShellError;

// =============================================================================
// Lock
// =============================================================================

/// Lock state of a protected file. `Unlocked` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Result of asking a lock for its next hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome<'a> {
    Hint(&'a str),
    /// Every hint has been handed out. Returned on all later calls too.
    Exhausted,
}

/// Result of a successful unlock attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The password matched and the file is now readable.
    Unlocked,
    /// The file was opened earlier; nothing changed.
    AlreadyUnlocked,
}

/// Password gate attached to a file.
///
/// Only the SHA-256 digest of the secret is kept. Candidates are hashed
/// and compared against it.
#[derive(Clone, Debug)]
pub struct Lock {
    /// Lowercase hex digest of the secret
    secret_digest: String,
    hints: Vec<String>,
    next_hint: usize,
    state: LockState,
}

impl Lock {
    /// Create a lock from a hex-encoded SHA-256 digest.
    ///
    /// Returns `None` unless the digest decodes to exactly 32 bytes.
    pub fn from_digest(secret_digest: &str, hints: Vec<String>) -> Option<Self> {
        let bytes = hex::decode(secret_digest).ok()?;
        if bytes.len() != 32 {
            return None;
        }
        Some(Self {
            secret_digest: hex::encode(bytes),
            hints,
            next_hint: 0,
            state: LockState::Locked,
        })
    }

    /// Create a lock from a plaintext secret.
    pub fn from_secret(secret: &str, hints: Vec<String>) -> Self {
        Self {
            secret_digest: digest(secret),
            hints,
            next_hint: 0,
            state: LockState::Locked,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == LockState::Unlocked
    }

    /// Try a password. A match moves the lock to `Unlocked` for good.
    pub fn attempt_unlock(&mut self, candidate: &str) -> bool {
        if digest(candidate) == self.secret_digest {
            self.state = LockState::Unlocked;
            true
        } else {
            false
        }
    }

    /// Hand out the next hint, advancing the cursor while hints remain.
    pub fn next_hint(&mut self) -> HintOutcome<'_> {
        match self.hints.get(self.next_hint) {
            Some(hint) => {
                self.next_hint += 1;
                HintOutcome::Hint(hint)
            }
            None => HintOutcome::Exhausted,
        }
    }

    /// Number of hints already handed out.
    pub fn hints_given(&self) -> usize {
        self.next_hint
    }
}

fn digest(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

// =============================================================================
// File
// =============================================================================

/// A leaf entry holding text content, optionally behind a [`Lock`].
#[derive(Clone, Debug)]
pub struct File {
    name: String,
    content: String,
    visible: bool,
    lock: Option<Lock>,
}

impl File {
    /// Create a visible, unlocked file.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            visible: true,
            lock: None,
        }
    }

    pub fn with_lock(mut self, lock: Lock) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn lock(&self) -> Option<&Lock> {
        self.lock.as_ref()
    }

    /// Read the content, refusing while the lock is closed.
    pub fn read(&self) -> Result<&str, ShellError> {
        match &self.lock {
            Some(lock) if !lock.is_unlocked() => Err(ShellError::Locked(self.name.clone())),
            _ => Ok(&self.content),
        }
    }

    /// Try a password against this file's lock.
    ///
    /// A hidden file becomes visible the moment it is unlocked.
    pub fn attempt_unlock(&mut self, candidate: &str) -> Result<UnlockOutcome, ShellError> {
        let lock = self
            .lock
            .as_mut()
            .ok_or_else(|| ShellError::NotUnlockable(self.name.clone()))?;

        if lock.is_unlocked() {
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }
        if lock.attempt_unlock(candidate) {
            self.visible = true;
            Ok(UnlockOutcome::Unlocked)
        } else {
            Err(ShellError::WrongPassword)
        }
    }

    pub fn next_hint(&mut self) -> Result<HintOutcome<'_>, ShellError> {
        match self.lock.as_mut() {
            Some(lock) => Ok(lock.next_hint()),
            None => Err(ShellError::NotUnlockable(self.name.clone())),
        }
    }
}

// =============================================================================
// Directory
// =============================================================================

/// A container of named nodes. Children keep their insertion order.
#[derive(Clone, Debug)]
pub struct Directory {
    name: String,
    visible: bool,
    children: Vec<Node>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Register a node under its own name.
    pub fn add_child(&mut self, node: impl Into<Node>) -> Result<(), ShellError> {
        let node = node.into();
        if self.children.iter().any(|c| c.name() == node.name()) {
            return Err(ShellError::DuplicateName(node.name().to_string()));
        }
        self.children.push(node);
        Ok(())
    }

    pub fn child(&self, name: &str) -> Result<&Node, ShellError> {
        self.children
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ShellError::NotFound(name.to_string()))
    }

    pub fn child_mut(&mut self, name: &str) -> Result<&mut Node, ShellError> {
        self.children
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| ShellError::NotFound(name.to_string()))
    }

    /// Child directory by name, regardless of its visibility.
    pub fn subdirectory(&self, name: &str) -> Option<&Directory> {
        self.children.iter().find_map(|c| match c {
            Node::Directory(dir) if dir.name == name => Some(dir),
            _ => None,
        })
    }

    pub fn subdirectory_mut(&mut self, name: &str) -> Option<&mut Directory> {
        self.children.iter_mut().find_map(|c| match c {
            Node::Directory(dir) if dir.name == name => Some(dir),
            _ => None,
        })
    }

    /// Visible children in insertion order.
    pub fn visible_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.is_visible())
    }

    /// Names of visible children in insertion order.
    pub fn list(&self) -> Vec<&str> {
        self.visible_children().map(Node::name).collect()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

// =============================================================================
// Node
// =============================================================================

/// Represents an entry in the virtual filesystem
#[derive(Clone, Debug)]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Directory(dir) => dir.name(),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Node::File(file) => file.is_visible(),
            Node::Directory(dir) => dir.is_visible(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints() -> Vec<String> {
        vec!["first".to_string(), "second".to_string()]
    }

    #[test]
    fn test_lock_from_digest_rejects_bad_hex() {
        assert!(Lock::from_digest("not-hex", vec![]).is_none());
        assert!(Lock::from_digest("abcd", vec![]).is_none());

        let digest = "CBE6BEB26479B568E5F15B50217C6C83C0EE051DC4E522B9840D8E291D6AAF46";
        let mut lock = Lock::from_digest(digest, vec![]).expect("valid digest");
        assert!(lock.attempt_unlock("correcthorsebatterystaple"));
    }

    #[test]
    fn test_lock_is_monotonic() {
        let mut lock = Lock::from_secret("open sesame", vec![]);
        assert_eq!(lock.state(), LockState::Locked);
        assert!(!lock.attempt_unlock("open"));
        assert_eq!(lock.state(), LockState::Locked);

        assert!(lock.attempt_unlock("open sesame"));
        assert!(!lock.attempt_unlock("wrong"));
        assert_eq!(lock.state(), LockState::Unlocked);
    }

    #[test]
    fn test_hints_in_order_then_exhausted() {
        let mut lock = Lock::from_secret("x", hints());
        assert_eq!(lock.next_hint(), HintOutcome::Hint("first"));
        assert_eq!(lock.next_hint(), HintOutcome::Hint("second"));
        assert_eq!(lock.next_hint(), HintOutcome::Exhausted);
        assert_eq!(lock.next_hint(), HintOutcome::Exhausted);
        assert_eq!(lock.hints_given(), 2);
    }

    #[test]
    fn test_locked_file_read() {
        let mut file = File::new("a.txt", "content").with_lock(Lock::from_secret("pw", hints()));
        assert_eq!(file.read(), Err(ShellError::Locked("a.txt".to_string())));

        assert_eq!(file.attempt_unlock("nope"), Err(ShellError::WrongPassword));
        assert_eq!(file.attempt_unlock("pw"), Ok(UnlockOutcome::Unlocked));
        assert_eq!(file.read(), Ok("content"));
        assert_eq!(file.attempt_unlock("pw"), Ok(UnlockOutcome::AlreadyUnlocked));
    }

    #[test]
    fn test_hidden_locked_file_revealed_on_unlock() {
        let mut file = File::new("b.txt", "")
            .with_visibility(false)
            .with_lock(Lock::from_secret("pw", vec![]));
        assert!(!file.is_visible());
        assert!(file.attempt_unlock("pw").is_ok());
        assert!(file.is_visible());
    }

    #[test]
    fn test_plain_file_not_unlockable() {
        let mut file = File::new("plain.txt", "hello");
        assert_eq!(file.read(), Ok("hello"));
        assert_eq!(
            file.attempt_unlock("anything"),
            Err(ShellError::NotUnlockable("plain.txt".to_string()))
        );
        assert!(file.next_hint().is_err());
    }

    #[test]
    fn test_add_child_rejects_duplicates() {
        let mut dir = Directory::new("docs");
        dir.add_child(File::new("a.txt", "")).unwrap();
        assert_eq!(
            dir.add_child(Directory::new("a.txt")),
            Err(ShellError::DuplicateName("a.txt".to_string()))
        );
    }

    #[test]
    fn test_list_keeps_insertion_order_and_skips_hidden() {
        let mut dir = Directory::new("root");
        dir.add_child(Directory::new("zeta")).unwrap();
        dir.add_child(Directory::new("ghost").with_visibility(false))
            .unwrap();
        dir.add_child(File::new("alpha.txt", "")).unwrap();

        assert_eq!(dir.list(), vec!["zeta", "alpha.txt"]);
        assert!(Directory::new("empty").list().is_empty());
    }

    #[test]
    fn test_child_lookup() {
        let mut dir = Directory::new("root");
        dir.add_child(Directory::new("sub").with_visibility(false))
            .unwrap();
        dir.add_child(File::new("f.txt", "")).unwrap();

        assert!(dir.child("sub").unwrap().is_directory());
        assert!(dir.subdirectory("sub").is_some());
        assert!(dir.subdirectory("f.txt").is_none());
        assert_eq!(
            dir.child("missing").map(|_| ()),
            Err(ShellError::NotFound("missing".to_string()))
        );
    }
}
