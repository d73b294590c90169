use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Text, ToSpan},
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    form::{FocusedInput, NoteForm},
    models::Note,
};

fn split_help(area: Rect) -> (Rect, Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (layout[0], layout[1])
}

pub fn render_home(frame: &mut Frame, notes: &[Note], list_state: &mut ListState) {
    let (list_area, help_area) = split_help(frame.area());

    let block = Block::bordered()
        .title("My Notes")
        .border_set(border::THICK);

    let help_message = Line::from_iter([
        "Esc/q".bold().yellow(),
        " exit, ".to_span(),
        "a".bold().yellow(),
        " add a note, ".to_span(),
        "j/k".bold().yellow(),
        " move, ".to_span(),
        "Enter".bold().yellow(),
        " open".to_span(),
    ])
    .centered();
    frame.render_widget(help_message, help_area);

    if notes.is_empty() {
        let hint = Paragraph::new(Line::from_iter([
            "No notes yet. Press ".to_span(),
            "a".bold().yellow(),
            " to add one.".to_span(),
        ]))
        .centered()
        .block(block);
        frame.render_widget(hint, list_area);
        return;
    }

    let items = notes.iter().map(|note| {
        ListItem::new(Text::from(vec![
            Line::from(note.title.as_str()).bold(),
            Line::from(note.preview()).dim(),
        ]))
    });

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().black().on_white());
    frame.render_stateful_widget(list, list_area, list_state);
}

pub fn render_form(frame: &mut Frame, form: &NoteForm) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(3),
            Constraint::Max(3),
            Constraint::Min(1),
        ])
        .split(frame.area());
    let (_, help_area) = split_help(layout[2]);

    let help_message = Line::from_iter([
        "Ctrl+S".bold().yellow(),
        " save, ".to_span(),
        "Tab".bold().yellow(),
        " switch input focus, ".to_span(),
        "Ctrl+C".bold().yellow(),
        " quit.".to_span(),
    ])
    .centered();

    let mut title_input = Paragraph::new(form.title.value()).style(Style::default().bold());
    let mut body_input = Paragraph::new(form.body.value());
    let mut title_block = Block::bordered().title("Title");
    let mut body_block = Block::bordered().title("Body");

    let area = match form.focused {
        FocusedInput::Title => {
            title_block = title_block.border_style(Style::new().yellow());
            layout[0]
        }
        FocusedInput::Body => {
            body_block = body_block.border_style(Style::new().yellow());
            layout[1]
        }
    };

    let input = form.focused_input();
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    match form.focused {
        FocusedInput::Title => title_input = title_input.scroll((0, scroll as u16)),
        FocusedInput::Body => body_input = body_input.scroll((0, scroll as u16)),
    }
    let x = input.visual_cursor().max(scroll) - scroll + 1;
    frame.set_cursor_position((area.x + x as u16, area.y + 1));

    frame.render_widget(title_input.block(title_block), layout[0]);
    frame.render_widget(body_input.block(body_block), layout[1]);
    frame.render_widget(help_message, help_area);
}

pub fn render_details(frame: &mut Frame, note: &Note) {
    let (body_area, help_area) = split_help(frame.area());

    let text = Text::from(vec![
        Line::from(note.title.as_str()).bold(),
        Line::default(),
        Line::from(note.body.as_str()),
    ]);
    let details = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title("Note").border_set(border::THICK));

    let help_message = Line::from_iter(["Esc/b".bold().yellow(), " back".to_span()]).centered();

    frame.render_widget(details, body_area);
    frame.render_widget(help_message, help_area);
}
