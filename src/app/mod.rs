//! Application core - owns the state, keybindings and terminal lifecycle

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use anyhow::Result;

use render_thread::RenderThread;

use crate::config::Config;
use crate::input::KeyBindings;
use crate::mail::Message;
use crate::mailbox::Mailbox;
use state::AppState;

pub struct App {
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config, messages: Vec<Message>) -> Self {
        let bindings = KeyBindings::new(&config.ui.keybinding_mode);
        let mailbox = Mailbox::new(messages, config.identity);
        let state = AppState::new(mailbox, &config.ui);

        Self {
            state,
            bindings,
            dirty: true, // Start dirty for initial render
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        let counts = self.state.mailbox.folder_counts();
        let folder = self.state.mailbox.selection().folder;
        self.state.set_status(format!(
            "{} unread in {}",
            counts.unread(folder),
            folder.label()
        ));

        let result = self.event_loop(&render_thread);

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        result
    }
}
