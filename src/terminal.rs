//! Line-based terminal host.
//!
//! Reads one line at a time, hands it to the session and prints the result.
//! The typewriter delay only affects rendering; the next line is read as
//! soon as the previous output has been written.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use vaultsh_core::config::{APP_NAME, APP_VERSION, ASCII_BANNER};
use vaultsh_core::{OutputLine, Session, Signal};

/// Rendering options for the terminal.
#[derive(Clone, Debug, Default)]
pub struct TerminalOptions {
    /// Print the greeting banner before the first prompt
    pub banner: bool,
    /// Delay between characters (zero prints whole lines)
    pub typing_delay: Duration,
}

/// Run a session until `exit` or end of input.
pub fn run<R, W>(
    mut session: Session,
    input: R,
    mut out: W,
    options: &TerminalOptions,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if options.banner {
        write_banner(&mut out)?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{}", session.prompt())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            tracing::debug!("end of input");
            break;
        };
        let line = line?;

        let result = session.handle_line(&line);
        for output in &result.output {
            render_line(&mut out, output, options.typing_delay)?;
        }

        if result.signal == Some(Signal::Exit) {
            tracing::debug!("exit requested");
            break;
        }
    }

    out.flush()
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", ASCII_BANNER.trim_end())?;
    writeln!(out, "{} v{}", APP_NAME, APP_VERSION)?;
    writeln!(out, "Type 'help' for available commands.")?;
    writeln!(out)
}

fn render_line<W: Write>(out: &mut W, line: &OutputLine, delay: Duration) -> io::Result<()> {
    let text = line.to_string();
    if delay.is_zero() {
        return writeln!(out, "{}", text);
    }

    for ch in text.chars() {
        write!(out, "{}", ch)?;
        out.flush()?;
        thread::sleep(delay);
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, options: &TerminalOptions) -> String {
        let session = Session::seeded().unwrap();
        let mut out = Vec::new();
        run(session, script.as_bytes(), &mut out, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner_toggle() {
        let banner = TerminalOptions {
            banner: true,
            ..Default::default()
        };
        let with = run_script("", &banner);
        let without = run_script("", &TerminalOptions::default());
        assert!(with.contains(APP_NAME));
        assert!(!without.contains(APP_NAME));
    }

    #[test]
    fn test_exit_stops_reading() {
        let out = run_script("exit\nls\n", &TerminalOptions::default());
        assert!(!out.contains("archives"));
    }

    #[test]
    fn test_renders_listing_and_errors() {
        let out = run_script("ls\nfoo\n", &TerminalOptions::default());
        assert!(out.contains("archives/"));
        assert!(out.contains("communications/"));
        assert!(out.contains("error: Command not found: foo"));
    }

    #[test]
    fn test_nested_prompt_shown() {
        let out = run_script(
            "cd communications\ndecode locked_file.txt\nhint\n",
            &TerminalOptions::default(),
        );
        assert!(out.contains("/communications $> "));
        assert!(out.contains("[decode locked_file.txt] password: "));
        assert!(out.contains("Hint: "));
    }

    #[test]
    fn test_typing_delay_renders_same_text() {
        let options = TerminalOptions {
            banner: false,
            typing_delay: Duration::from_micros(1),
        };
        assert_eq!(
            run_script("help\n", &options),
            run_script("help\n", &TerminalOptions::default())
        );
    }
}
