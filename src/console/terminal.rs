//! Crossterm-backed console on the process's stdin/stdout.

use super::{Console, ConsoleError, Tone};
use crate::config::SeriesConfig;
use crate::games::tictactoe::Symbol;
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Attribute, Color, ContentStyle, Print, PrintStyledContent, ResetColor, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument};

/// Interactive console for two players sharing one terminal.
#[derive(Debug)]
pub struct TerminalConsole {
    color: bool,
    clear_screen: bool,
}

impl TerminalConsole {
    /// Creates a console honoring the color and screen-clearing settings.
    #[instrument(skip(config))]
    pub fn new(config: &SeriesConfig) -> Self {
        debug!(
            color = config.color(),
            clear_screen = config.clear_screen(),
            "Terminal console ready"
        );
        Self {
            color: *config.color(),
            clear_screen: *config.clear_screen(),
        }
    }
}

fn style_for(tone: Tone) -> Option<ContentStyle> {
    let (color, bold) = match tone {
        Tone::Plain => return None,
        Tone::Info => (Color::Cyan, false),
        Tone::Prompt => (Color::Yellow, false),
        Tone::Error => (Color::Red, false),
        Tone::Banner => (Color::Green, true),
        Tone::Winner => (Color::Magenta, true),
        Tone::Tie => (Color::Yellow, true),
        Tone::Highlight => (Color::White, true),
        Tone::Mark(Symbol::X) => (Color::Red, false),
        Tone::Mark(Symbol::O) => (Color::Blue, false),
        Tone::Muted => (Color::DarkGrey, false),
    };
    Some(ContentStyle {
        foreground_color: Some(color),
        attributes: if bold {
            Attribute::Bold.into()
        } else {
            Default::default()
        },
        ..Default::default()
    })
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.clear_screen {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        let mut out = io::stdout().lock();
        match style_for(tone).filter(|_| self.color) {
            Some(style) => queue!(out, PrintStyledContent(style.apply(text)))?,
            None => queue!(out, Print(text))?,
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        io::stdout().flush()?;
        let mut bytes = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut bytes)? == 0 {
            debug!("Standard input closed");
            return Ok(None);
        }
        Ok(Some(decode_line(&bytes)))
    }

    fn pause(&mut self, duration: Duration) -> Result<(), ConsoleError> {
        io::stdout().flush()?;
        std::thread::sleep(duration);
        Ok(())
    }
}

/// Strips the line ending; bytes that are not UTF-8 become U+FFFD so the
/// parsers reject them like any other bad input.
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

/// Restores terminal styling when dropped.
///
/// Acquire one at startup and keep it alive until the process is about to
/// exit, including on the interrupt path.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Takes responsibility for the terminal's style state.
    #[instrument]
    pub fn acquire() -> Self {
        debug!("Terminal guard acquired");
        Self { _private: () }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Resetting terminal styles");
        let mut out = io::stdout();
        let _ = execute!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\n"));
    }
}
