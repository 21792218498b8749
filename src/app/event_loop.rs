//! Main event loop

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::constants::INPUT_POLL_MS;
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Clear expired errors
            if self.state.clear_error_if_expired() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty && render_thread.render(self.state.clone()) {
                self.dirty = false;
            }

            if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                continue;
            }

            let evt = event::read()?;
            // Any input event (including resize) requires re-render
            self.dirty = true;
            match handle_input(evt, &self.state, &self.bindings) {
                InputResult::Quit => break,
                InputResult::Action(action) => {
                    self.state.acknowledge_error();
                    self.handle_action(action);
                }
                InputResult::Char(c) => {
                    self.state.acknowledge_error();
                    self.handle_char(c);
                }
                InputResult::Backspace => {
                    self.state.acknowledge_error();
                    self.handle_backspace();
                }
                InputResult::Continue => {}
            }
        }

        Ok(())
    }
}
