//! Interactive reader: prompts, then reads a visible line or a masked secret.

use crate::core::interrupt::{InterruptSource, InterruptWatcher};
use crate::error::Result;
use crate::models::prompt_options::PromptOptions;
use crate::util::signal::PlatformInterrupts;
use crate::util::terminal::{StdTerminal, Terminal};
use std::io;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reads operator input from a [`Terminal`], watching `S` for interrupts
/// during masked reads.
pub struct Prompter<T: Terminal, S: InterruptSource> {
    terminal: Arc<T>,
    interrupts: S,
}

impl Prompter<StdTerminal, PlatformInterrupts> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(StdTerminal, PlatformInterrupts::default())
    }
}

impl<T: Terminal, S: InterruptSource> Prompter<T, S> {
    pub fn new(terminal: T, interrupts: S) -> Self {
        Self {
            terminal: Arc::new(terminal),
            interrupts,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn interrupts(&self) -> &S {
        &self.interrupts
    }

    /// Show `message` (unless blank) and read the operator's answer.
    ///
    /// With `options.hide_input` the answer is read in raw mode without echo,
    /// and the terminal is restored on every path out of this call. An
    /// interrupt during that read restores the terminal and ends the process.
    pub fn acquire_input(&self, message: &str, options: &PromptOptions) -> Result<String> {
        if !message.trim().is_empty() {
            self.terminal.write_prompt(&options.render(message))?;
        }

        let input = if options.hide_input {
            self.read_hidden()?
        } else {
            strip_line_terminator(self.terminal.read_line()?)?
        };
        Ok(input)
    }

    fn read_hidden(&self) -> io::Result<String> {
        let mode = self.terminal.make_raw()?;
        debug!("terminal in raw mode for masked read");

        let terminal = Arc::clone(&self.terminal);
        let watcher = match InterruptWatcher::spawn(&self.interrupts, terminal, mode.clone()) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                warn!(error = %err, "interrupt notification unavailable");
                None
            }
        };

        let read = self.terminal.read_masked();

        if let Some(watcher) = &watcher {
            if !watcher.claim() {
                // The watcher restored the terminal and ended the process.
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "interrupted during masked read",
                ));
            }
        }

        if let Err(err) = self.terminal.restore(&mode) {
            warn!(error = %err, "failed to restore terminal mode");
        }
        if !matches!(&read, Err(e) if e.kind() != io::ErrorKind::Interrupted) {
            self.terminal.newline();
        }
        if let Some(watcher) = watcher {
            watcher.stop();
        }

        match read {
            Ok(secret) => Ok(secret.as_str().to_owned()),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                debug!("Ctrl+C during masked read");
                self.terminal.terminate();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

/// Strip the trailing `\n` (and a `\r` before it). A line without a
/// terminator means the stream ended mid-line.
pub fn strip_line_terminator(mut line: String) -> io::Result<String> {
    if !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "incomplete line",
        ));
    }
    line.pop();
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// [`Prompter::acquire_input`] on stdin/stdout.
pub fn acquire_input(message: &str, options: &PromptOptions) -> Result<String> {
    Prompter::stdio().acquire_input(message, options)
}
