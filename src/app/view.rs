use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.theme_mode);

    // Main layout: search bar + message banner + results + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::render_search_bar(f, vertical[0], state, &theme);
    widgets::render_message(f, vertical[1], state, &theme);
    widgets::render_results(f, vertical[2], state, &theme);
    widgets::render_status_bar(f, vertical[3], state, &theme);

    // Overlays
    widgets::render_add_form(f, state, &theme);
    widgets::render_detail_overlay(f, state, &theme);
}
