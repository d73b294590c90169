use crossterm::event::Event;
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusedInput {
    #[default]
    Title,
    Body,
}

/// Inputs of the add-note screen.
#[derive(Debug, Default)]
pub struct NoteForm {
    pub title: Input,
    pub body: Input,
    pub focused: FocusedInput,
}

impl NoteForm {
    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            FocusedInput::Title => FocusedInput::Body,
            FocusedInput::Body => FocusedInput::Title,
        };
    }

    pub fn focused_input(&self) -> &Input {
        match self.focused {
            FocusedInput::Title => &self.title,
            FocusedInput::Body => &self.body,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match self.focused {
            FocusedInput::Title => self.title.handle_event(event),
            FocusedInput::Body => self.body.handle_event(event),
        };
    }

    pub fn values(&self) -> (String, String) {
        (
            self.title.value().to_string(),
            self.body.value().to_string(),
        )
    }

    /// Current values; leaves the form blank for the next visit.
    pub fn take(&mut self) -> (String, String) {
        let values = self.values();
        self.title.reset();
        self.body.reset();
        self.focused = FocusedInput::Title;
        values
    }
}
