use tracing::debug;

use crate::app::actions::{Action, DataPayload, SideEffect};
use crate::app::state::AppState;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::MoveUp => {
            if state.cursor > 0 {
                state.cursor -= 1;
            }
            vec![]
        }
        Action::MoveDown => {
            if state.cursor + 1 < state.issues.len() {
                state.cursor += 1;
            }
            vec![]
        }
        Action::SetFilter(filter) => {
            state.filter = filter;
            state.pagination.page = 1;
            state.cursor = 0;
            vec![state.reload_issues()]
        }
        Action::CycleFilter => {
            let next = state.filter.cycle();
            update(state, Action::SetFilter(next))
        }
        Action::NextPage => {
            state.pagination.page += 1;
            state.cursor = 0;
            vec![state.reload_issues()]
        }
        Action::PreviousPage => {
            // Callers guard page 1; no clamping here
            state.pagination.page = state.pagination.page.saturating_sub(1);
            state.cursor = 0;
            vec![state.reload_issues()]
        }
        Action::Refresh => {
            state.error = None;
            if state.repository.is_none() {
                vec![state.initialize()]
            } else {
                vec![state.reload_issues()]
            }
        }
        Action::OpenInBrowser => {
            let url = state
                .selected_issue_url()
                .unwrap_or_else(|| state.repository_url());
            vec![SideEffect::OpenUrl(url)]
        }
        Action::OpenAvatar => match state.selected_avatar_url() {
            Some(url) => vec![SideEffect::OpenUrl(url)],
            None => vec![],
        },
        Action::Back => {
            state.error = None;
            vec![]
        }
        Action::DataLoaded { request, payload } => {
            if !state.is_current(request) {
                debug!(
                    request,
                    latest = state.latest_request,
                    "Discarding stale fetch result"
                );
                return vec![];
            }

            match payload {
                DataPayload::Initial {
                    repository,
                    issues,
                    rate_limit,
                } => {
                    state.repository = Some(repository);
                    state.issues = issues;
                    state.rate_limit = rate_limit;
                }
                DataPayload::Issues { issues, rate_limit } => {
                    state.issues = issues;
                    state.rate_limit = rate_limit;
                }
            }

            state.shown_query = Some(state.query());
            state.cursor = state.cursor.min(state.issues.len().saturating_sub(1));
            state.loading = false;
            state.last_refresh = Some(chrono::Utc::now());
            vec![]
        }
        Action::LoadError { request, error } => {
            if !state.is_current(request) {
                debug!(request, error = %error, "Discarding stale fetch error");
                return vec![];
            }
            state.loading = false;
            state.error = Some(error);
            vec![]
        }
        Action::DismissError => {
            state.error = None;
            vec![]
        }
    }
}
