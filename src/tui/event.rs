//! Keyboard input, bridged to [`Message`]

use crate::app::message::Message;
use crate::prelude::*;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Wait up to 50ms for input; a timeout becomes a [`Message::Tick`]
pub fn poll() -> Result<Option<Message>> {
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            // Only react to press events so Windows terminals do not
            // deliver every keystroke twice (press + release)
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(Some(Message::Key(key)))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
