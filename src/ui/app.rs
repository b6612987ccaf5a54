use crate::catalog::{Entry, Index};
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Which pane currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Detail,
}

/// Discrete input understood by the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Back,
    Quit,
    Resize { width: u16, height: u16 },
}

/// Terminal geometry from the most recent resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Screen regions derived from a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAreas {
    pub list: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Split the screen into two equal side-by-side panes, each inset by a
    /// one-cell margin, above a single footer row.
    pub fn areas(&self) -> PaneAreas {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(self.area());
        let [list, detail] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(body);
        let margin = Margin::new(1, 1);

        PaneAreas {
            list: list.inner(margin),
            detail: detail.inner(margin),
            footer,
        }
    }
}

impl From<Rect> for Viewport {
    fn from(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }
}

/// Navigation state for one browse session.
///
/// `items` is a snapshot of the catalog taken at startup, already in display
/// order. `selected` is clamped to the snapshot and never wraps.
#[derive(Debug, Clone)]
pub struct App {
    pub items: Vec<Entry>,
    pub selected: usize,
    pub focus: Focus,
    pub viewport: Viewport,
    pub should_quit: bool,
}

impl App {
    /// Start a session over `index`, sorted for display.
    pub fn new(index: &Index) -> Self {
        Self::from_entries(index.sorted_entries())
    }

    /// Start a session over entries that are already in display order.
    pub fn from_entries(items: Vec<Entry>) -> Self {
        Self {
            items,
            selected: 0,
            focus: Focus::List,
            viewport: Viewport::default(),
            should_quit: false,
        }
    }

    /// Apply one action. Combinations not valid for the current focus are
    /// ignored.
    pub fn handle(&mut self, action: Action) {
        match (self.focus, action) {
            (_, Action::Resize { width, height }) => {
                self.viewport = Viewport::new(width, height);
            }
            (Focus::List, Action::MoveUp) => self.select_previous(),
            (Focus::List, Action::MoveDown) => self.select_next(),
            (Focus::List, Action::Confirm) => self.focus = Focus::Detail,
            (Focus::List, Action::Quit) => self.should_quit = true,
            (Focus::Detail, Action::Back) => self.focus = Focus::List,
            _ => {}
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.items.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// The entry under the cursor, `None` only for an empty catalog.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.items.get(self.selected)
    }

    /// True while the details pane holds focus.
    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Detail
    }
}
