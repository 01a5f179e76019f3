use crate::api::models::RecipeCard;
use crate::app::actions::{Action, DataPayload, FetchError, SideEffect};
use crate::app::state::{AddForm, AppState, DetailState, InputMode, MessageKind, ResultsView};

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::MoveUp => {
            if state.overlay.is_some() {
                state.detail_scroll = state.detail_scroll.saturating_sub(1);
            } else if state.cursor > 0 {
                state.cursor -= 1;
            }
            vec![]
        }
        Action::MoveDown => {
            if state.overlay.is_some() {
                state.detail_scroll = state.detail_scroll.saturating_add(1);
            } else {
                let max = state.visible_cards().len().saturating_sub(1);
                if state.cursor < max {
                    state.cursor += 1;
                }
            }
            vec![]
        }
        Action::Select => {
            let Some(card) = state.selected_card() else {
                return vec![];
            };
            let (source, id) = (card.source, card.id.clone());
            let seq = state.begin_detail_fetch();
            vec![SideEffect::FetchDetail { seq, source, id }]
        }
        Action::Back => {
            if state.overlay.is_some() {
                state.overlay = None;
                state.detail_scroll = 0;
            } else if state.input_mode != InputMode::Normal {
                if state.input_mode == InputMode::AddForm {
                    state.add_form = AddForm::default();
                }
                state.input_mode = InputMode::Normal;
                state.clear_message();
            } else {
                state.clear_message();
            }
            vec![]
        }
        Action::SwitchView => {
            state.view = match state.view {
                ResultsView::Search => ResultsView::Collection,
                ResultsView::Collection => ResultsView::Search,
            };
            state.cursor = 0;
            state.clear_message();
            // The collection has no client-side copy worth trusting;
            // entering the view always re-fetches.
            if state.view == ResultsView::Collection {
                vec![SideEffect::LoadCollection]
            } else {
                vec![]
            }
        }
        Action::Refresh => match state.view {
            ResultsView::Collection => vec![SideEffect::LoadCollection],
            ResultsView::Search => match state.last_query.clone() {
                Some(query) => {
                    state.set_message(
                        format!("Searching for \"{query}\"..."),
                        MessageKind::Loading,
                    );
                    vec![SideEffect::SearchCatalog(query)]
                }
                None => vec![],
            },
        },
        Action::RandomRecipe => {
            let seq = state.begin_detail_fetch();
            vec![SideEffect::FetchRandom { seq }]
        }
        Action::OpenInBrowser => {
            if let Some(DetailState::Loaded(detail)) = &state.overlay
                && let Some(link) = detail.link()
            {
                return vec![SideEffect::OpenUrl(link.to_string())];
            }
            vec![]
        }
        Action::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            vec![]
        }
        Action::StartSearch => {
            state.input_mode = InputMode::Search;
            state.clear_message();
            vec![]
        }
        Action::SearchInput(ch) => {
            if state.input_mode == InputMode::Search {
                state.search_input.push(ch);
            }
            vec![]
        }
        Action::SearchBackspace => {
            if state.input_mode == InputMode::Search {
                state.search_input.pop();
            }
            vec![]
        }
        Action::SubmitSearch => {
            let query = state.search_input.trim().to_string();
            if query.is_empty() {
                state.set_message("Please enter a search term", MessageKind::Error);
                return vec![];
            }
            state.input_mode = InputMode::Normal;
            state.view = ResultsView::Search;
            state.search_results.clear();
            state.cursor = 0;
            state.last_query = Some(query.clone());
            state.set_message(format!("Searching for \"{query}\"..."), MessageKind::Loading);
            vec![SideEffect::SearchCatalog(query)]
        }
        Action::OpenAddForm => {
            state.input_mode = InputMode::AddForm;
            state.add_form = AddForm::default();
            state.clear_message();
            vec![]
        }
        Action::FormInput(ch) => {
            if state.input_mode == InputMode::AddForm {
                state.add_form.field_mut().push(ch);
            }
            vec![]
        }
        Action::FormBackspace => {
            if state.input_mode == InputMode::AddForm {
                state.add_form.field_mut().pop();
            }
            vec![]
        }
        Action::FormNextField => {
            if state.input_mode == InputMode::AddForm {
                state.add_form.next_field();
            }
            vec![]
        }
        Action::FormPrevField => {
            if state.input_mode == InputMode::AddForm {
                state.add_form.prev_field();
            }
            vec![]
        }
        Action::SubmitForm => {
            if state.input_mode != InputMode::AddForm {
                return vec![];
            }
            // Rejected client-side before any request goes out.
            let Some(recipe) = state.add_form.build(&state.placeholder_image) else {
                state.set_message("Please fill in all required fields.", MessageKind::Error);
                return vec![];
            };
            state.input_mode = InputMode::Normal;
            state.add_form = AddForm::default();
            state.set_message("Adding recipe...", MessageKind::Loading);
            vec![SideEffect::CreateRecipe(recipe)]
        }
        Action::DeleteSelected => {
            // Catalog cards carry no delete control.
            match state.selected_local_id() {
                Some(id) => vec![SideEffect::DeleteRecipe(id)],
                None => vec![],
            }
        }
        Action::DataLoaded(payload) => apply_payload(state, payload),
        Action::LoadError(err) => apply_error(state, err),
    }
}

fn apply_payload(state: &mut AppState, payload: DataPayload) -> Vec<SideEffect> {
    match payload {
        DataPayload::SearchResults { query, cards } => {
            if cards.is_empty() {
                state.search_results.clear();
                state.set_message(format!("No recipes found for \"{query}\""), MessageKind::Error);
            } else {
                state.search_results = cards;
                state.clear_message();
            }
            if state.view == ResultsView::Search {
                state.cursor = 0;
            }
            vec![]
        }
        DataPayload::Collection(recipes) => {
            state.collection = recipes.iter().map(RecipeCard::from).collect();
            state.clamp_cursor();
            vec![]
        }
        DataPayload::Detail { seq, detail } => {
            if state.detail_current(seq) {
                state.overlay = Some(DetailState::Loaded(detail));
            }
            vec![]
        }
        DataPayload::Created => {
            state.set_message("Recipe added successfully!", MessageKind::Info);
            state.view = ResultsView::Collection;
            state.cursor = 0;
            vec![SideEffect::LoadCollection]
        }
        DataPayload::Deleted => {
            state.set_message("Recipe deleted.", MessageKind::Info);
            vec![SideEffect::LoadCollection]
        }
    }
}

fn apply_error(state: &mut AppState, err: FetchError) -> Vec<SideEffect> {
    match err {
        FetchError::Search(message)
        | FetchError::Collection(message)
        | FetchError::Create(message)
        | FetchError::Delete(message) => {
            state.set_message(message, MessageKind::Error);
        }
        FetchError::Detail { seq, message } => {
            // Inline in the overlay, and only for the fetch it belongs to.
            if state.detail_current(seq) {
                state.overlay = Some(DetailState::Failed(message));
            }
        }
    }
    vec![]
}
