use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use newsai_core::Msg;
use newsai_logging::newsai_info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::keys::{self, KeyAction};
use super::ui;
use super::Controller;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) fn run_tui(mut controller: Controller, tick: Duration) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut guard = TerminalGuard::new(io::stdout());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")?;

    let result = event_loop(&mut terminal, &mut controller, tick);

    guard.restore().context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    newsai_info!("UI closed");
    result
}

/// Leaves raw mode and the alternate screen on every exit path, including
/// early returns during setup.
struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out, active: true }
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = disable_raw_mode();
        let screen = execute!(self.out, DisableBracketedPaste, LeaveAlternateScreen);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Polls input for up to one tick, folds finished requests in, redraws when dirty.
fn event_loop(terminal: &mut Term, controller: &mut Controller, tick: Duration) -> Result<()> {
    let mut view = controller.view();
    terminal
        .draw(|frame| ui::render::draw(frame, &view))
        .context("Failed to draw terminal")?;

    loop {
        let mut dirty = false;

        if event::poll(tick).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) => match keys::translate_key(&view, key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Dispatch(msg) => dirty |= controller.dispatch(msg),
                    KeyAction::Ignore => {}
                },
                Event::Paste(text) => dirty |= controller.dispatch(keys::paste(&view, &text)),
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        } else {
            dirty |= controller.dispatch(Msg::Tick);
        }

        dirty |= controller.pump();

        if dirty {
            view = controller.view();
            terminal
                .draw(|frame| ui::render::draw(frame, &view))
                .context("Failed to draw terminal")?;
        }
    }
}
