use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::github::models::{Issue, IssueFilter};
use crate::ui::theme;
use crate::util::config::UiConfig;
use crate::util::time::relative_time;

pub fn render_loading(f: &mut Frame, area: Rect, state: &AppState) {
    let y = area.y + area.height / 2;
    let line_area = Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1u16.min(area.height),
    };
    let text = format!("Loading {}...", state.repo_id);
    let para = Paragraph::new(Span::styled(text, theme::LOADING)).alignment(Alignment::Center);
    f.render_widget(para, line_area);
}

/// Full-screen error shown when the initial load never completed.
pub fn render_load_failure(f: &mut Frame, area: Rect, state: &AppState) {
    let msg = state
        .error
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "Repository not loaded".to_string());

    let lines = vec![
        Line::from(Span::styled(
            format!("Could not load {}", state.repo_id),
            theme::HEADER,
        )),
        Line::from(""),
        Line::from(Span::styled(msg, theme::ERROR)),
        Line::from(""),
        Line::from(Span::styled("r: retry | q: quit", theme::DIM)),
    ];

    let height = (lines.len() as u16).min(area.height);
    let inner = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    };
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, inner);
}

pub fn render_owner_header(f: &mut Frame, area: Rect, state: &AppState, ui: &UiConfig) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::BORDER);

    let Some(ref repo) = state.repository else {
        f.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(repo.owner.login.as_str(), theme::LINK)),
        Line::from(Span::styled(repo.name.as_str(), theme::HEADER)),
        Line::from(Span::styled(
            repo.description.as_deref().unwrap_or(""),
            theme::DIM,
        )),
    ];
    if ui.show_avatar_urls {
        lines.push(Line::from(Span::styled(
            repo.owner.avatar_url.as_str(),
            theme::DIM,
        )));
    }

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(para, area);
}

pub fn render_filter_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled("Select a status: ", theme::DIM)];
    for (i, filter) in IssueFilter::ALL.iter().enumerate() {
        let style = if *filter == state.filter {
            theme::FILTER_ACTIVE
        } else {
            theme::DIM
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, filter.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    f.render_widget(para, area);
}

pub fn render_issue_list(f: &mut Frame, area: Rect, state: &AppState, ui: &UiConfig) {
    let shown = state.shown_query.unwrap_or_else(|| state.query());
    let title = format!(
        " Issues [{}] page {} ",
        shown.filter, shown.pagination.page
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::BORDER);

    if state.issues.is_empty() {
        let para = Paragraph::new("No issues on this page")
            .style(theme::DIM)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = state
        .issues
        .iter()
        .enumerate()
        .map(|(i, issue)| issue_item(issue, i == state.cursor, ui))
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn issue_item<'a>(issue: &'a Issue, selected: bool, ui: &UiConfig) -> ListItem<'a> {
    let title_style = if selected {
        theme::HIGHLIGHT
    } else {
        theme::HEADER
    };

    let mut title = vec![Span::styled(issue.title.as_str(), title_style)];
    if ui.show_labels {
        for label in &issue.labels {
            title.push(Span::raw(" "));
            title.push(Span::styled(format!(" {} ", label.name), theme::LABEL));
        }
    }

    let mut meta = vec![Span::styled(issue.user.login.as_str(), theme::ISSUE_AUTHOR)];
    if let Some(number) = issue.number {
        meta.push(Span::styled(format!("  #{}", number), theme::DIM));
    }
    if let Some(ref updated) = issue.updated_at {
        meta.push(Span::styled(
            format!("  updated {}", relative_time(updated)),
            theme::DIM,
        ));
    }

    let mut lines = vec![Line::from(title), Line::from(meta)];
    if ui.show_avatar_urls {
        lines.push(Line::from(Span::styled(
            issue.user.avatar_url.as_str(),
            theme::DIM,
        )));
    }
    lines.push(Line::from(""));

    ListItem::new(lines)
}

pub fn render_pagination(f: &mut Frame, area: Rect, state: &AppState) {
    let previous_style = if state.pagination.can_go_previous() {
        theme::BUTTON
    } else {
        theme::BUTTON_DISABLED
    };

    let previous = Span::styled("[< Previous]", previous_style);
    let next = Span::styled("[Next >]", theme::BUTTON);
    let page = format!("Page {}", state.pagination.page);

    let width = area.width as usize;
    let used = 12 + 8 + page.len();
    let gap = width.saturating_sub(used) / 2;

    let line = Line::from(vec![
        previous,
        Span::raw(" ".repeat(gap)),
        Span::styled(page, theme::DIM),
        Span::raw(" ".repeat(gap)),
        next,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = "j/k: move | h/l: page | f: filter | r: refresh | o: open | a: avatar | q: quit";

    let status = if state.loading {
        "Loading...".to_string()
    } else if let Some(ref err) = state.error {
        format!("Error: {} (Esc to dismiss)", err)
    } else if let Some(shown) = state.shown_query.filter(|_| state.showing_previous_query()) {
        format!(
            "Showing {} page {}, {} page {} not loaded (r: retry)",
            shown.filter, shown.pagination.page, state.filter, state.pagination.page
        )
    } else {
        String::new()
    };

    let rate_info = if state.rate_limit.limit > 0 {
        format!(
            "API: {}/{}",
            state.rate_limit.remaining, state.rate_limit.limit
        )
    } else {
        String::new()
    };

    let refresh_info = state
        .last_refresh
        .as_ref()
        .map(|t| format!(" | {}", relative_time(t)))
        .unwrap_or_default();

    let right_text = format!("{}{}", rate_info, refresh_info);

    let total_width = area.width as usize;
    let center_width = total_width.saturating_sub(key_hints.len() + right_text.len() + 2);
    let status_truncated: String = if status.chars().count() > center_width {
        let keep = center_width.saturating_sub(3);
        format!("{}...", status.chars().take(keep).collect::<String>())
    } else {
        status
    };

    let padding = center_width.saturating_sub(status_truncated.chars().count());

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ", theme::STATUS_BAR),
        Span::styled(
            status_truncated,
            if state.error.is_some() {
                theme::ERROR.bg(ratatui::style::Color::DarkGray)
            } else {
                theme::STATUS_BAR
            },
        ),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(right_text, theme::STATUS_BAR),
    ]);

    let bar = Paragraph::new(line).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}

pub fn render_error_modal(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref err) = state.error else {
        return;
    };

    let modal_width = (area.width / 2).max(40).min(area.width.saturating_sub(4));
    let modal_height = 6u16.min(area.height);
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x,
        y,
        width: modal_width,
        height: modal_height,
    };

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(theme::ERROR);

    let text = vec![
        Line::from(Span::styled(err.to_string(), theme::ERROR)),
        Line::from(""),
        Line::from(Span::styled("Esc: dismiss | r: retry", theme::DIM)),
    ];

    let para = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(para, modal_area);
}
