//! Interactive shell over a simulated filesystem with password-locked files.
//!
//! A [`Session`] takes one line of input at a time and returns a
//! [`CommandResult`] for the host to render. The host owns the terminal:
//! reading lines, drawing the prompt from [`Session::prompt`] and ending the
//! session on [`Signal::Exit`].
//!
//! ```
//! use vaultsh_core::Session;
//!
//! let mut session = Session::seeded().unwrap();
//! let listing = session.handle_line("ls");
//! assert_eq!(listing.output.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod shell;

pub use error::{ManifestError, ShellError};
pub use models::OutputLine;
pub use shell::{CommandResult, Mode, Session, Signal, Tree};
