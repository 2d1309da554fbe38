use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::{AppState, Phase};
use crate::ui::widgets;
use crate::util::config::UiConfig;

pub fn render(f: &mut Frame, state: &AppState, ui: &UiConfig) {
    let full = f.area();

    match state.phase() {
        Phase::Loading => {
            widgets::render_loading(f, full, state);
            return;
        }
        Phase::Failed => {
            widgets::render_load_failure(f, full, state);
            return;
        }
        Phase::Ready => {}
    }

    let header_height = if ui.show_avatar_urls { 5 } else { 4 };

    // Owner header, filter, issues, pagination, status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(full);

    widgets::render_owner_header(f, vertical[0], state, ui);
    widgets::render_filter_bar(f, vertical[1], state);
    widgets::render_issue_list(f, vertical[2], state, ui);
    widgets::render_pagination(f, vertical[3], state);
    widgets::render_status_bar(f, vertical[4], state);

    if state.error.is_some() {
        widgets::render_error_modal(f, full, state);
    }
}
