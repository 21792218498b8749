//! Background render thread.
//!
//! The render thread owns the Terminal and draws snapshots of AppState sent
//! from the event loop, so a slow terminal never delays input handling.

use std::io;
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use chrono::Utc;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

pub enum RenderCommand {
    Render(Box<AppState>),
    Shutdown,
}

pub struct RenderThread {
    cmd_tx: SyncSender<RenderCommand>,
    handle: Option<JoinHandle<()>>,
}

impl RenderThread {
    /// Enter raw mode and the alternate screen, then start drawing.
    ///
    /// Terminal setup happens before the thread starts so failures surface
    /// to the caller instead of leaving a dead renderer behind.
    pub fn spawn() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(e);
        }
        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                restore_terminal();
                return Err(e);
            }
        };

        // Capacity 1: only the latest state matters
        let (cmd_tx, cmd_rx) = mpsc::sync_channel::<RenderCommand>(1);

        let handle = thread::Builder::new()
            .name("render".to_string())
            .spawn(move || {
                while let Ok(cmd) = cmd_rx.recv() {
                    match cmd {
                        RenderCommand::Render(state) => {
                            let now = Utc::now();
                            if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state, now)) {
                                tracing::error!("Render error: {}", e);
                            }
                        }
                        RenderCommand::Shutdown => break,
                    }
                }
                restore_terminal();
            });

        let handle = match handle {
            Ok(h) => h,
            Err(e) => {
                restore_terminal();
                return Err(e);
            }
        };

        Ok(Self {
            cmd_tx,
            handle: Some(handle),
        })
    }

    /// Request a render of the given state (non-blocking).
    /// Returns false when the frame was not queued; the caller retries later.
    pub fn render(&self, state: AppState) -> bool {
        match self.cmd_tx.try_send(RenderCommand::Render(Box::new(state))) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::trace!("Render thread busy, skipping frame");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Render thread disconnected");
                false
            }
        }
    }

    /// Shutdown the render thread and wait for the terminal to be restored.
    pub fn shutdown(mut self) {
        let _ = self.cmd_tx.send(RenderCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}
