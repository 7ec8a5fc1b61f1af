use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

/// Takes an event, checks if it is a key press event, and returns the [`KeyCode`]
///
/// Auto-repeated presses count as presses.
pub(super) fn event_keycode(event: &Event) -> Option<KeyCode> {
    let Event::Key(key) = event else {
        return None;
    };

    if key.kind == KeyEventKind::Release {
        return None;
    }

    Some(key.code)
}

/// A `width` x `height` rectangle centered in `area`
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, center_vert, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_vert);

    center
}
