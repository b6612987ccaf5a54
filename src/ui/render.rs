use crate::catalog::Entry;
use crate::ui::app::{App, Focus, Viewport};
use crate::ui::keymap;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the library list, the detail pane and the footer.
///
/// Pane geometry comes from the last resize the app saw; before the first
/// resize the whole frame is used.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let viewport = if app.viewport.is_empty() {
        Viewport::from(frame.area())
    } else {
        app.viewport
    };
    let areas = viewport.areas();
    let clip = frame.area();

    frame.render_widget(Block::default().style(theme.base()), clip);

    let (list_border, detail_border) = if app.is_editing() {
        (theme.inactive_border(), theme.active_border())
    } else {
        (theme.active_border(), theme.inactive_border())
    };

    render_list(
        frame,
        app,
        theme,
        areas.list.intersection(clip),
        pane_block(" Library ", list_border),
    );
    render_detail(
        frame,
        app.selected_entry(),
        theme,
        areas.detail.intersection(clip),
        pane_block(" Details ", detail_border),
    );
    render_footer(frame, app.focus, theme, areas.footer.intersection(clip));
}

fn pane_block(title: &'static str, border_style: Style) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(border_style)
}

fn render_list(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, block: Block) {
    let items: Vec<ListItem> = app
        .items
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let title_style = if i == app.selected {
                theme.selected_title()
            } else {
                theme.title()
            };
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(entry.title.clone(), title_style)),
                Line::from(Span::styled(entry.key.clone(), theme.key())),
                Line::from(""),
            ]))
        })
        .collect();

    let mut state =
        ListState::default().with_selected(app.selected_entry().map(|_| app.selected));
    let list = List::new(items).block(block);

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(
    frame: &mut Frame,
    entry: Option<&Entry>,
    theme: &Theme,
    area: Rect,
    block: Block,
) {
    let text = match entry {
        Some(entry) => detail_lines(entry, theme),
        None => vec![
            Line::from("The catalog is empty"),
            Line::from(""),
            Line::from(Span::styled(
                "Add folders to the content directory and rebuild",
                theme.key(),
            )),
        ],
    };

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn detail_lines<'a>(entry: &'a Entry, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(entry.title.as_str(), theme.title())),
        Line::from(Span::styled(entry.key.as_str(), theme.key())),
        Line::from(Span::styled(entry.tags.join(", "), theme.tags())),
    ];

    if !entry.cover.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Cover: ", theme.key()),
            Span::raw(entry.cover.as_str()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Episodes ({})", entry.episodes.len()),
        theme.key(),
    )));
    lines.extend(
        entry
            .episodes
            .iter()
            .map(|source| Line::from(format!("  {}", source.title))),
    );

    lines
}

fn render_footer(frame: &mut Frame, focus: Focus, theme: &Theme, area: Rect) {
    let footer = Paragraph::new(keymap::help_text(focus)).style(theme.key());
    frame.render_widget(footer, area);
}
