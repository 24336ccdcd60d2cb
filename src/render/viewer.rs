//! Where finished charts go.

use std::io::{IsTerminal, Write, stdin, stdout};

use tracing::debug;

use crate::{
    core::{bounds::terminal_geometry, color::colorize, error::EdaError, style::Style},
    render::{chart::Chart, frame::Renderer, tty_raw::wait_for_key},
};

/// Shows one chart and returns once the user is done with it.
pub trait Viewer {
    fn show(&mut self, chart: &Chart) -> Result<(), EdaError>;
}

/// Hides the cursor on construction and shows it again on Drop
struct CursorGuard;
impl CursorGuard {
    fn new() -> Self {
        let _ = write!(stdout(), "\x1b[?25l");
        CursorGuard
    }
}
impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = write!(stdout(), "\x1b[?25h");
        let _ = stdout().flush();
    }
}

/// Full-screen charts on the controlling terminal, one key press each.
#[derive(Debug)]
pub struct TerminalViewer {
    style: Style,
}

impl TerminalViewer {
    /// Fails with [`EdaError::NoDisplay`] unless both stdin and stdout are a
    /// terminal.
    pub fn open(style: Style) -> Result<Self, EdaError> {
        if !stdin().is_terminal() || !stdout().is_terminal() {
            return Err(EdaError::NoDisplay);
        }
        Ok(Self { style })
    }
}

impl Viewer for TerminalViewer {
    fn show(&mut self, chart: &Chart) -> Result<(), EdaError> {
        let geometry = terminal_geometry().ok_or(EdaError::NoDisplay)?;
        let frame = Renderer::new(&self.style, geometry).render(chart)?;

        let _cursor = CursorGuard::new();
        {
            let mut term = stdout().lock();
            write!(term, "\x1b[2J\x1b[1;1H")?;
            term.write_all(&frame)?;
            write!(
                term,
                "{}",
                colorize(&self.style.label, "press any key to continue")
            )?;
            term.flush()?;
        }

        wait_for_key()?;
        writeln!(stdout())?;
        debug!(title = %chart.title, "chart dismissed");
        Ok(())
    }
}
