//! Command execution logic.
//!
//! Runs parsed commands against the tree and returns the output together
//! with the mode the session should be in afterwards.

use tracing::debug;

use crate::config::{HELP_TEXT, HINT_KEYWORD, NO_MORE_HINTS};
use crate::error::ShellError;
use crate::models::{HintOutcome, LockState, Node, OutputLine};
use crate::shell::filesystem::{CdOutcome, Tree};
use crate::shell::session::Mode;

use super::{Command, CommandResult, PathArg};

/// Execute a command in normal mode.
///
/// Only `decode` on a locked file leaves normal mode.
pub fn execute_command(cmd: Command, tree: &mut Tree) -> (CommandResult, Mode) {
    let result = match cmd {
        Command::Exit => CommandResult::exit(),
        Command::Ls => execute_ls(tree),
        Command::Cd(dir) => execute_cd(&dir, tree),
        Command::Cat(file) => execute_cat(&file, tree),
        Command::Help => CommandResult::output(HELP_TEXT.lines().map(OutputLine::text).collect()),
        Command::Decode(file) => return execute_decode(file, tree),
    };
    (result, Mode::Normal)
}

/// Handle a line typed at the password prompt for `file`.
///
/// `hint` asks for the next hint; anything else is a password candidate.
/// The prompt stays up until the file is unlocked.
pub fn answer_secret(file: String, input: &str, tree: &mut Tree) -> (CommandResult, Mode) {
    let candidate = input.trim();
    if candidate.is_empty() {
        return (CommandResult::empty(), Mode::AwaitingSecret(file));
    }

    if candidate == HINT_KEYWORD {
        let result = match tree.hint(&file) {
            Ok(HintOutcome::Hint(hint)) => {
                CommandResult::line(OutputLine::info(format!("Hint: {}", hint)))
            }
            Ok(HintOutcome::Exhausted) => CommandResult::line(OutputLine::info(NO_MORE_HINTS)),
            Err(err) => CommandResult::error(err),
        };
        return (result, Mode::AwaitingSecret(file));
    }

    match tree.decode(&file, candidate) {
        Ok(_) => {
            let line = OutputLine::success(format!("Access granted. {} is now unlocked.", file));
            (CommandResult::line(line), Mode::Normal)
        }
        Err(ShellError::WrongPassword) => (
            CommandResult::error(ShellError::WrongPassword),
            Mode::AwaitingSecret(file),
        ),
        // The target vanished from under the cursor; nothing left to wait for.
        Err(err) => (CommandResult::error(err), Mode::Normal),
    }
}

/// Execute `ls` command.
fn execute_ls(tree: &Tree) -> CommandResult {
    let lines = tree
        .cursor()
        .visible_children()
        .map(|node| match node {
            Node::Directory(dir) => OutputLine::dir_entry(dir.name()),
            Node::File(file) => OutputLine::file_entry(file.name()),
        })
        .collect();
    CommandResult::output(lines)
}

/// Execute `cd` command.
fn execute_cd(dir: &PathArg, tree: &mut Tree) -> CommandResult {
    match tree.change_directory(dir.as_str()) {
        Ok(CdOutcome::AlreadyAtRoot) => {
            CommandResult::line(OutputLine::info("Already at the root directory."))
        }
        Ok(CdOutcome::MovedUp(path)) => {
            CommandResult::line(OutputLine::text(format!("Moved up to {}", path)))
        }
        Ok(CdOutcome::Entered(name)) => {
            CommandResult::line(OutputLine::text(format!("Entered {}", name)))
        }
        Err(err) => CommandResult::error(err),
    }
}

/// Execute `cat` command.
fn execute_cat(file: &PathArg, tree: &Tree) -> CommandResult {
    match tree.read_file(file.as_str()) {
        Ok(content) => CommandResult::output(content.lines().map(OutputLine::text).collect()),
        Err(err) => CommandResult::error(err),
    }
}

/// Execute `decode` command.
///
/// Opens the password prompt only for a file that is actually locked, so
/// the prompt can always be left by unlocking.
fn execute_decode(file: PathArg, tree: &Tree) -> (CommandResult, Mode) {
    match tree.lock_state(file.as_str()) {
        Ok(LockState::Locked) => {
            debug!(file = %file, "awaiting password");
            let line = OutputLine::info(format!(
                "{} is locked. Enter the password, or type '{}' for a hint.",
                file, HINT_KEYWORD
            ));
            (
                CommandResult::line(line),
                Mode::AwaitingSecret(file.into_string()),
            )
        }
        Ok(LockState::Unlocked) => {
            let line = OutputLine::success(format!("{} is already unlocked.", file));
            (CommandResult::line(line), Mode::Normal)
        }
        Err(err) => (CommandResult::error(err), Mode::Normal),
    }
}
