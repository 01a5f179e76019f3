use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error};

use crate::api::error::ApiError;
use crate::api::models::{RecipeDetail, Source};
use crate::api::{CatalogClient, CollectionClient};
use crate::app::actions::{Action, DataPayload, FetchError, SideEffect};
use crate::app::state::{AppState, InputMode};
use crate::app::update::update;
use crate::app::view;
use crate::ui::theme::ThemeMode;

pub async fn run(
    catalog: CatalogClient,
    collection: CollectionClient,
    theme_mode: ThemeMode,
    placeholder_image: String,
) -> Result<()> {
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

    let result = run_loop(&mut terminal, catalog, collection, theme_mode, placeholder_image).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: CatalogClient,
    collection: CollectionClient,
    theme_mode: ThemeMode,
    placeholder_image: String,
) -> Result<()> {
    let mut state = AppState::new(theme_mode, placeholder_image);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let semaphore = Arc::new(Semaphore::new(4));

    // Initial load: the collection view is shown first
    spawn_side_effect(
        SideEffect::LoadCollection,
        &catalog,
        &collection,
        &action_tx,
        &semaphore,
    );

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        // Wait for events
        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            spawn_side_effect(effect, &catalog, &collection, &action_tx, &semaphore);
                        }
                    }
            }
            // Results from background requests
            Some(action) = action_rx.recv() => {
                let effects = update(&mut state, action);
                for effect in effects {
                    spawn_side_effect(effect, &catalog, &collection, &action_tx, &semaphore);
                }
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
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

    // The detail overlay swallows everything while open
    if state.overlay.is_some() {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Back),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('o') => Some(Action::OpenInBrowser),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Search => match code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(*c)),
            _ => None,
        },
        InputMode::AddForm => match code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab => Some(Action::FormNextField),
            KeyCode::BackTab => Some(Action::FormPrevField),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(*c)),
            _ => None,
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Some(Action::Select),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchView),
            KeyCode::Char('/') => Some(Action::StartSearch),
            KeyCode::Char('a') => Some(Action::OpenAddForm),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Char('m') => Some(Action::RandomRecipe),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        },
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    catalog: &CatalogClient,
    collection: &CollectionClient,
    action_tx: &mpsc::UnboundedSender<Action>,
    semaphore: &Arc<Semaphore>,
) {
    match effect {
        SideEffect::SearchCatalog(query) => {
            let catalog = catalog.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!(query = %query, "Searching catalog");

                match catalog.search(&query).await {
                    Ok(cards) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::SearchResults {
                            query,
                            cards,
                        }));
                    }
                    Err(e) => {
                        error!(query = %query, error = %e, "Catalog search failed");
                        let _ = tx.send(Action::LoadError(FetchError::Search(
                            "Something went wrong. Please try again.".to_string(),
                        )));
                    }
                }
            });
        }
        SideEffect::FetchDetail { seq, source, id } => {
            let catalog = catalog.clone();
            let collection = collection.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!(id = %id, source = %source, "Fetching recipe details");

                let result = match source {
                    Source::Catalog => catalog.lookup(&id).await.map(RecipeDetail::Catalog),
                    Source::Local => collection.get(&id).await.map(RecipeDetail::Local),
                };

                match result {
                    Ok(detail) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::Detail { seq, detail }));
                    }
                    Err(e) => {
                        error!(id = %id, source = %source, error = %e, "Detail fetch failed");
                        let _ = tx.send(Action::LoadError(FetchError::Detail {
                            seq,
                            message: detail_failure_text(&e),
                        }));
                    }
                }
            });
        }
        SideEffect::FetchRandom { seq } => {
            let catalog = catalog.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!("Fetching random recipe");

                match catalog.random().await {
                    Ok(recipe) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::Detail {
                            seq,
                            detail: RecipeDetail::Catalog(recipe),
                        }));
                    }
                    Err(e) => {
                        error!(error = %e, "Random recipe fetch failed");
                        let _ = tx.send(Action::LoadError(FetchError::Detail {
                            seq,
                            message: detail_failure_text(&e),
                        }));
                    }
                }
            });
        }
        SideEffect::LoadCollection => {
            let collection = collection.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!("Fetching local recipes");

                match collection.list().await {
                    Ok(recipes) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::Collection(recipes)));
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to fetch local recipes");
                        let _ = tx.send(Action::LoadError(FetchError::Collection(
                            "Failed to fetch local recipes.".to_string(),
                        )));
                    }
                }
            });
        }
        SideEffect::CreateRecipe(recipe) => {
            let collection = collection.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!(name = %recipe.name, "Creating local recipe");

                match collection.create(&recipe).await {
                    Ok(()) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::Created));
                    }
                    Err(e) => {
                        error!(name = %recipe.name, error = %e, "Failed to create recipe");
                        let _ = tx.send(Action::LoadError(FetchError::Create(
                            "Failed to add recipe. Try again.".to_string(),
                        )));
                    }
                }
            });
        }
        SideEffect::DeleteRecipe(id) => {
            let collection = collection.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!(id = %id, "Deleting local recipe");

                match collection.delete(&id).await {
                    Ok(()) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::Deleted));
                    }
                    Err(e) => {
                        error!(id = %id, error = %e, "Failed to delete recipe");
                        let _ = tx.send(Action::LoadError(FetchError::Delete(
                            "Failed to delete recipe.".to_string(),
                        )));
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

/// Overlay-facing text for a failed detail fetch. A decode failure
/// means the server answered but had no usable recipe.
fn detail_failure_text(e: &ApiError) -> String {
    match e {
        ApiError::Decode(_) => "Could not load recipe details.".to_string(),
        _ => "Failed to load recipe details. Check your connection or try again.".to_string(),
    }
}
