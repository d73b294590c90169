use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame, widgets::ListState};
use tracing::debug;

use crate::{
    form::{FocusedInput, NoteForm},
    screen::{Action, Screen, ScreenController},
    store::{NoteStore, SubscriptionId},
    ui,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(Action),
    NotesChanged(usize),
    Quit,
}

type Inbox = Rc<RefCell<VecDeque<Message>>>;

pub struct App {
    store: NoteStore,
    controller: ScreenController,
    form: NoteForm,
    list_state: ListState,
    inbox: Inbox,
    subscription: SubscriptionId,
    running: bool,
}

impl App {
    pub fn new(mut store: NoteStore) -> App {
        let inbox: Inbox = Rc::default();
        let sink = Rc::clone(&inbox);
        let subscription = store.subscribe(move |notes| {
            sink.borrow_mut().push_back(Message::NotesChanged(notes.len()));
        });

        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        App {
            store,
            controller: ScreenController::new(),
            form: NoteForm::default(),
            list_state,
            inbox,
            subscription,
            running: true,
        }
    }

    pub fn screen(&self) -> &Screen {
        self.controller.screen()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops listening to the store and hands it back.
    pub fn into_store(mut self) -> NoteStore {
        self.store.unsubscribe(self.subscription);
        self.store
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        while self.is_running() {
            terminal.draw(|f| self.draw(f))?;
            let event = crossterm::event::read()?;
            self.handle_event(&event);
            self.drain();
        }

        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        match self.controller.screen() {
            Screen::Home => {
                ui::render_home(frame, &self.store.list(), &mut self.list_state);
            }
            Screen::AddNote => {
                ui::render_form(frame, &self.form);
            }
            Screen::Details(note) => {
                ui::render_details(frame, note);
            }
        }
    }

    /// Turns a terminal event into queued messages; see [`App::drain`].
    pub fn handle_event(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.screen() {
            Screen::Home => self.handle_home_key(key),
            Screen::AddNote => self.handle_form_key(key, event),
            Screen::Details(_) => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') => {
                    self.send(Message::Navigate(Action::Back));
                }
                _ => {}
            },
        }
    }

    fn handle_home_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.send(Message::Quit),
            KeyCode::Char('a') => self.send(Message::Navigate(Action::OpenAddForm)),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Enter | KeyCode::Char('l') => {
                if let Some(index) = self.list_state.selected() {
                    self.send(Message::Navigate(Action::Select(index)));
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: &KeyEvent, event: &Event) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.send(Message::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => self.submit_form(),
            (_, KeyCode::Enter) if self.form.focused == FocusedInput::Body => self.submit_form(),
            (_, KeyCode::Tab) | (_, KeyCode::Enter) => self.form.toggle_focus(),
            _ => self.form.handle_event(event),
        }
    }

    fn submit_form(&mut self) {
        let (title, body) = self.form.take();
        self.send(Message::Navigate(Action::Submit { title, body }));
    }

    fn move_cursor(&mut self, step: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub fn send(&self, message: Message) {
        self.inbox.borrow_mut().push_back(message);
    }

    /// Handles queued messages, including the ones they enqueue, until none
    /// are left.
    pub fn drain(&mut self) {
        loop {
            let message = self.inbox.borrow_mut().pop_front();
            let Some(message) = message else {
                break;
            };
            self.update(message);
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Navigate(action) => {
                self.controller.apply(action, &mut self.store);
            }
            Message::NotesChanged(count) => {
                debug!(count, "notes changed");
                if self.list_state.selected().is_none() && count > 0 {
                    self.list_state.select(Some(0));
                }
            }
            Message::Quit => self.running = false,
        }
    }
}
