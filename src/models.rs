/// Number of body characters shown in the list preview.
pub const PREVIEW_LEN: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Note {
        Note {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Body cut to [`PREVIEW_LEN`] characters, with a trailing `...` only
    /// when something was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.body.chars();
        let head: String = chars.by_ref().take(PREVIEW_LEN).collect();

        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_body_is_cut_with_ellipsis() {
        let body = "a".repeat(60);
        let note = Note::new("t", body.clone());

        assert_eq!(note.preview(), format!("{}...", &body[..50]));
    }

    #[test]
    fn short_body_is_kept_whole() {
        let body = "b".repeat(30);
        let note = Note::new("t", body.clone());

        assert_eq!(note.preview(), body);
    }

    #[test]
    fn exactly_fifty_chars_has_no_ellipsis() {
        let note = Note::new("t", "c".repeat(50));

        assert_eq!(note.preview(), "c".repeat(50));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let note = Note::new("t", "é".repeat(51));

        assert_eq!(note.preview(), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn empty_body_previews_empty() {
        assert_eq!(Note::new("", "").preview(), "");
    }
}
