//! Terminal device access: prompt output, line reads, raw mode and masked reads.
//!
//! Everything the reader does to the controlling terminal goes through the
//! [`Terminal`] trait so each exit path can be driven by a scripted device.

use crate::constants;
use std::io::{self, BufRead, Read, Write};
use zeroize::{Zeroize, Zeroizing};

pub trait Terminal: Send + Sync + 'static {
    /// Terminal state captured before entering raw mode.
    type Mode: Clone + Send + 'static;

    /// Write the prompt and flush it.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read one line, terminator included when present.
    fn read_line(&self) -> io::Result<String>;

    /// Enter raw mode and return the state to restore later.
    fn make_raw(&self) -> io::Result<Self::Mode>;

    fn restore(&self, mode: &Self::Mode) -> io::Result<()>;

    /// Read a line without echo. Only called while in raw mode.
    fn read_masked(&self) -> io::Result<Zeroizing<String>>;

    /// Best-effort newline after a masked read.
    fn newline(&self);

    /// End the process after an interrupt.
    fn terminate(&self);
}

/// The process's stdin/stdout, with raw mode applied to fd 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    type Mode = raw::Mode;

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(prompt.as_bytes())?;
        out.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    fn make_raw(&self) -> io::Result<Self::Mode> {
        raw::enter()
    }

    fn restore(&self, mode: &Self::Mode) -> io::Result<()> {
        raw::restore(mode)
    }

    fn read_masked(&self) -> io::Result<Zeroizing<String>> {
        read_masked_from(&mut io::stdin().lock())
    }

    fn newline(&self) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(b"\n");
        let _ = out.flush();
    }

    fn terminate(&self) {
        std::process::exit(constants::INTERRUPT_EXIT_CODE);
    }
}

#[cfg(unix)]
mod raw {
    use nix::sys::termios::{self, SetArg, Termios};
    use std::io;

    pub type Mode = Termios;

    pub fn enter() -> io::Result<Termios> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin)?;
        let mut raw = original.clone();
        termios::cfmakeraw(&mut raw);
        termios::tcsetattr(&stdin, SetArg::TCSANOW, &raw)?;
        Ok(original)
    }

    pub fn restore(mode: &Termios) -> io::Result<()> {
        termios::tcsetattr(io::stdin(), SetArg::TCSANOW, mode)?;
        Ok(())
    }
}

// crossterm keeps the original console mode itself, so the captured value
// is only a marker.
#[cfg(windows)]
mod raw {
    use std::io;

    pub type Mode = ();

    pub fn enter() -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    pub fn restore(_mode: &()) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

#[cfg(not(any(unix, windows)))]
mod raw {
    use std::io;

    pub type Mode = ();

    pub fn enter() -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "raw terminal mode is not supported on this platform",
        ))
    }

    pub fn restore(_mode: &()) -> io::Result<()> {
        Ok(())
    }
}

fn pop_char(line: &mut Vec<u8>) {
    // Drop UTF-8 continuation bytes up to and including the lead byte.
    while let Some(byte) = line.pop() {
        if byte & 0xC0 != 0x80 {
            break;
        }
    }
}

/// Read a line byte by byte from a terminal in raw mode.
///
/// CR or LF ends the line, backspace and DEL erase one character, and
/// Ctrl+C yields an `Interrupted` error. End of input with nothing typed is
/// `UnexpectedEof`.
pub fn read_masked_from<R: Read>(reader: &mut R) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(Vec::with_capacity(64));
    let mut byte = [0u8; 1];

    loop {
        let n = match reader.read(&mut byte) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if n == 0 {
            if line.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a line was read",
                ));
            }
            break;
        }
        match byte[0] {
            b'\r' | b'\n' => break,
            constants::CTRL_C => {
                byte.zeroize();
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "masked read interrupted",
                ));
            }
            constants::BACKSPACE | constants::DELETE => pop_char(&mut line),
            b => line.push(b),
        }
    }
    byte.zeroize();

    let text = std::str::from_utf8(&line)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Zeroizing::new(text.to_string()))
}
