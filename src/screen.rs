use tracing::{debug, trace};

use crate::{models::Note, store::NoteStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    AddNote,
    Details(Note),
}

/// User intents the navigation reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenAddForm,
    Submit { title: String, body: String },
    Select(usize),
    Back,
}

/// Which screen is visible, and how the user moves between them.
///
/// The only way out of [`Screen::AddNote`] is submitting the form.
#[derive(Debug, Default)]
pub struct ScreenController {
    screen: Screen,
}

impl ScreenController {
    pub fn new() -> ScreenController {
        ScreenController::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Applies `action`, returning whether the screen changed. Actions that
    /// make no sense on the current screen are ignored.
    pub fn apply(&mut self, action: Action, store: &mut NoteStore) -> bool {
        let next = match (&self.screen, action) {
            (Screen::Home, Action::OpenAddForm) => Screen::AddNote,
            (Screen::AddNote, Action::Submit { title, body }) => {
                store.append(Note::new(title, body));
                Screen::Home
            }
            (Screen::Home, Action::Select(index)) => match store.get(index) {
                Some(note) => Screen::Details(note.clone()),
                None => {
                    trace!(index, "no note to select");
                    return false;
                }
            },
            (Screen::Details(_), Action::Back) => Screen::Home,
            (screen, action) => {
                trace!(?screen, ?action, "action ignored");
                return false;
            }
        };

        debug!(from = ?self.screen, to = ?next, "screen transition");
        self.screen = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ScreenController {
        fn selected_note(&self) -> Option<&Note> {
            match &self.screen {
                Screen::Details(note) => Some(note),
                _ => None,
            }
        }

        fn open_add_form(&mut self, store: &mut NoteStore) -> bool {
            self.apply(Action::OpenAddForm, store)
        }

        fn submit(&mut self, store: &mut NoteStore, title: String, body: String) -> bool {
            self.apply(Action::Submit { title, body }, store)
        }

        fn select(&mut self, store: &mut NoteStore, index: usize) -> bool {
            self.apply(Action::Select(index), store)
        }

        fn back(&mut self, store: &mut NoteStore) -> bool {
            self.apply(Action::Back, store)
        }
    }

    fn store_with(titles: &[&str]) -> NoteStore {
        let mut store = NoteStore::new();
        for title in titles {
            store.append(Note::new(*title, format!("{title} body")));
        }
        store
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(ScreenController::new().screen(), &Screen::Home);
    }

    #[test]
    fn add_from_home_opens_form() {
        let mut store = NoteStore::new();
        let mut controller = ScreenController::new();

        assert!(controller.open_add_form(&mut store));
        assert_eq!(controller.screen(), &Screen::AddNote);
    }

    #[test]
    fn submitting_empty_form_appends_and_returns_home() {
        let mut store = NoteStore::new();
        let mut controller = ScreenController::new();
        controller.open_add_form(&mut store);

        assert!(controller.submit(&mut store, String::new(), String::new()));

        assert_eq!(controller.screen(), &Screen::Home);
        assert_eq!(*store.list(), vec![Note::new("", "")]);
    }

    #[test]
    fn every_submit_grows_store_by_one() {
        let mut store = store_with(&["a", "b"]);
        let mut controller = ScreenController::new();

        for (i, (title, body)) in [("x", ""), ("", "y"), ("z", "w")].into_iter().enumerate() {
            controller.open_add_form(&mut store);
            controller.submit(&mut store, title.into(), body.into());
            assert_eq!(controller.screen(), &Screen::Home);
            assert_eq!(store.len(), 3 + i);
        }
    }

    #[test]
    fn select_then_back_round_trips() {
        let mut store = store_with(&["first", "second", "third"]);
        let before = store.list();
        let mut controller = ScreenController::new();

        assert!(controller.select(&mut store, 1));
        assert_eq!(
            controller.selected_note(),
            Some(&Note::new("second", "second body"))
        );

        assert!(controller.back(&mut store));
        assert_eq!(controller.screen(), &Screen::Home);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn select_without_note_stays_home() {
        let mut store = store_with(&["only"]);
        let mut controller = ScreenController::new();

        assert!(!controller.select(&mut store, 4));
        assert_eq!(controller.screen(), &Screen::Home);
    }

    #[test]
    fn form_has_no_way_out_but_submit() {
        let mut store = store_with(&["only"]);
        let mut controller = ScreenController::new();
        controller.open_add_form(&mut store);

        assert!(!controller.back(&mut store));
        assert!(!controller.select(&mut store, 0));
        assert!(!controller.open_add_form(&mut store));
        assert_eq!(controller.screen(), &Screen::AddNote);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn submit_outside_form_does_not_append() {
        let mut store = NoteStore::new();
        let mut controller = ScreenController::new();

        assert!(!controller.submit(&mut store, "t".into(), "b".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn details_only_goes_back() {
        let mut store = store_with(&["a", "b"]);
        let mut controller = ScreenController::new();
        controller.select(&mut store, 0);

        assert!(!controller.open_add_form(&mut store));
        assert!(!controller.select(&mut store, 1));
        assert_eq!(controller.selected_note(), Some(&Note::new("a", "a body")));
    }
}
