use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, DataPayload, SideEffect};
use crate::app::state::{AppState, Phase};
use crate::app::update::update;
use crate::app::view;
use crate::github::GithubClient;
use crate::github::models::{IssueFilter, RepoId};
use crate::util::config::AppConfig;

pub async fn run(config: AppConfig, client: GithubClient, repo: RepoId) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client, repo).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
    repo: RepoId,
) -> Result<()> {
    let mut state = AppState::new(repo);
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Initial data fetch
    let initial = state.initialize();
    spawn_side_effect(initial, &client, &action_tx);

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| view::render(f, &state, &config.ui))?;

        if state.should_quit {
            break;
        }

        let action = tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => map_event_to_action(&event, &state),
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event error");
                        None
                    }
                    None => Some(Action::Quit),
                }
            }
            Some(action) = action_rx.recv() => Some(action),
        };

        if let Some(action) = action {
            for effect in update(&mut state, action) {
                spawn_side_effect(effect, &client, &action_tx);
            }
        }
    }

    Ok(())
}

pub fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if let KeyCode::Char('c') = code
        && modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(Action::Quit);
    }

    // Handle error modal first
    if state.error.is_some() {
        return match code {
            KeyCode::Esc => Some(Action::DismissError),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    // Nothing to navigate until the repository is loaded
    if state.phase() != Phase::Ready {
        return match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') if state.phase() == Phase::Failed => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
            if state.pagination.can_go_previous() {
                Some(Action::PreviousPage)
            } else {
                None
            }
        }
        KeyCode::Char('f') | KeyCode::Tab => Some(Action::CycleFilter),
        KeyCode::Char('1') => Some(Action::SetFilter(IssueFilter::All)),
        KeyCode::Char('2') => Some(Action::SetFilter(IssueFilter::Open)),
        KeyCode::Char('3') => Some(Action::SetFilter(IssueFilter::Closed)),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenInBrowser),
        KeyCode::Char('a') => Some(Action::OpenAvatar),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    client: &GithubClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::LoadInitial {
            repo,
            query,
            request,
        } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(repo = %repo, request, "Loading repository and first issue page");

                match client.fetch_initial(&repo, &query).await {
                    Ok((repository, issues, rate_limit)) => {
                        let _ = tx.send(Action::DataLoaded {
                            request,
                            payload: DataPayload::Initial {
                                repository,
                                issues,
                                rate_limit,
                            },
                        });
                    }
                    Err(e) => {
                        error!(repo = %repo, error = %e, "Initial load failed");
                        let _ = tx.send(Action::LoadError { request, error: e });
                    }
                }
            });
        }
        SideEffect::FetchIssues {
            repo,
            query,
            request,
        } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(
                    repo = %repo,
                    state = %query.filter,
                    page = query.pagination.page,
                    request,
                    "Fetching issues"
                );

                match client.fetch_issues(&repo, &query).await {
                    Ok((issues, rate_limit)) => {
                        let _ = tx.send(Action::DataLoaded {
                            request,
                            payload: DataPayload::Issues { issues, rate_limit },
                        });
                    }
                    Err(e) => {
                        error!(repo = %repo, error = %e, "Failed to fetch issues");
                        let _ = tx.send(Action::LoadError { request, error: e });
                    }
                }
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}
