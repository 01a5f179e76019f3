use mealdash::api::models::{LocalRecipe, RecipeCard, RecipeDetail, Source};
use mealdash::app::actions::{Action, DataPayload, FetchError, SideEffect};
use mealdash::app::state::{AppState, DetailState, InputMode, MessageKind, ResultsView};
use mealdash::app::update::update;
use mealdash::ui::theme::ThemeMode;

fn make_state() -> AppState {
    AppState::new(ThemeMode::Dark, "https://example.com/placeholder.png".into())
}

fn make_card(source: Source, id: &str, name: &str) -> RecipeCard {
    RecipeCard {
        source,
        id: id.into(),
        name: name.into(),
        thumb: String::new(),
    }
}

fn make_local(id: &str, name: &str) -> LocalRecipe {
    LocalRecipe {
        id: id.into(),
        name: name.into(),
        ingredients: vec!["salt".into()],
        instructions: "mix".into(),
        image: "img.png".into(),
    }
}

// --- Search ---

#[test]
fn test_blank_search_shows_message_and_issues_no_request() {
    let mut state = make_state();
    update(&mut state, Action::StartSearch);

    let effects = update(&mut state, Action::SubmitSearch);
    assert!(effects.is_empty());
    let msg = state.message.as_ref().unwrap();
    assert_eq!(msg.text, "Please enter a search term");
    assert_eq!(msg.kind, MessageKind::Error);
}

#[test]
fn test_whitespace_only_search_is_rejected() {
    let mut state = make_state();
    update(&mut state, Action::StartSearch);
    for c in "   ".chars() {
        update(&mut state, Action::SearchInput(c));
    }

    let effects = update(&mut state, Action::SubmitSearch);
    assert!(effects.is_empty());
    assert_eq!(state.message.as_ref().unwrap().text, "Please enter a search term");
}

#[test]
fn test_submit_search_issues_request_and_shows_loading() {
    let mut state = make_state();
    update(&mut state, Action::StartSearch);
    for c in "pasta".chars() {
        update(&mut state, Action::SearchInput(c));
    }

    let effects = update(&mut state, Action::SubmitSearch);
    assert_eq!(effects, vec![SideEffect::SearchCatalog("pasta".into())]);
    assert_eq!(state.view, ResultsView::Search);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.last_query.as_deref(), Some("pasta"));
    let msg = state.message.as_ref().unwrap();
    assert_eq!(msg.kind, MessageKind::Loading);
    assert!(msg.text.contains("pasta"));
}

#[test]
fn test_reopened_search_keeps_last_query_for_editing() {
    let mut state = make_state();
    update(&mut state, Action::StartSearch);
    for c in "pasta".chars() {
        update(&mut state, Action::SearchInput(c));
    }
    update(&mut state, Action::SubmitSearch);

    // The input field keeps its text after submit, so reopening the
    // search starts from the previous query instead of a blank line.
    update(&mut state, Action::StartSearch);
    assert_eq!(state.search_input, "pasta");
    update(&mut state, Action::SearchBackspace);
    assert_eq!(state.search_input, "past");
}

#[test]
fn test_empty_result_set_shows_not_found_message() {
    let mut state = make_state();
    let effects = update(
        &mut state,
        Action::DataLoaded(DataPayload::SearchResults {
            query: "unicorn".into(),
            cards: vec![],
        }),
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.message.as_ref().unwrap().text,
        "No recipes found for \"unicorn\""
    );
    assert!(state.search_results.is_empty());
}

#[test]
fn test_search_results_replace_list_and_clear_message() {
    let mut state = make_state();
    state.set_message("Searching...", MessageKind::Loading);

    update(
        &mut state,
        Action::DataLoaded(DataPayload::SearchResults {
            query: "pasta".into(),
            cards: vec![make_card(Source::Catalog, "1", "Carbonara")],
        }),
    );

    assert_eq!(state.search_results.len(), 1);
    assert!(state.message.is_none());
}

#[test]
fn test_search_failure_shows_banner() {
    let mut state = make_state();
    update(
        &mut state,
        Action::LoadError(FetchError::Search(
            "Something went wrong. Please try again.".into(),
        )),
    );
    let msg = state.message.as_ref().unwrap();
    assert_eq!(msg.kind, MessageKind::Error);
    assert_eq!(msg.text, "Something went wrong. Please try again.");
}

// --- Delete ---

#[test]
fn test_delete_on_local_card_issues_request() {
    let mut state = make_state();
    state.collection = vec![make_card(Source::Local, "7", "My Soup")];
    state.view = ResultsView::Collection;
    state.cursor = 0;

    let effects = update(&mut state, Action::DeleteSelected);
    assert_eq!(effects, vec![SideEffect::DeleteRecipe("7".into())]);
}

#[test]
fn test_delete_on_catalog_card_is_a_no_op() {
    let mut state = make_state();
    state.search_results = vec![make_card(Source::Catalog, "52772", "Teriyaki")];
    state.view = ResultsView::Search;
    state.cursor = 0;

    let effects = update(&mut state, Action::DeleteSelected);
    assert!(effects.is_empty());
}

#[test]
fn test_failed_delete_keeps_visible_list_unchanged() {
    let mut state = make_state();
    state.collection = vec![
        make_card(Source::Local, "1", "Soup"),
        make_card(Source::Local, "2", "Stew"),
    ];
    state.view = ResultsView::Collection;

    let effects = update(
        &mut state,
        Action::LoadError(FetchError::Delete("Failed to delete recipe.".into())),
    );

    assert!(effects.is_empty());
    assert_eq!(state.collection.len(), 2);
    assert_eq!(state.message.as_ref().unwrap().text, "Failed to delete recipe.");
}

#[test]
fn test_successful_delete_refreshes_collection() {
    let mut state = make_state();
    let effects = update(&mut state, Action::DataLoaded(DataPayload::Deleted));
    assert_eq!(effects, vec![SideEffect::LoadCollection]);
    assert_eq!(state.message.as_ref().unwrap().text, "Recipe deleted.");
}

// --- Detail overlay ordering ---

#[test]
fn test_stale_detail_response_is_dropped() {
    let mut state = make_state();
    state.search_results = vec![
        make_card(Source::Catalog, "1", "First"),
        make_card(Source::Catalog, "2", "Second"),
    ];
    state.view = ResultsView::Search;

    // Start two fetches; the first's seq is now stale.
    let first = match update(&mut state, Action::Select).pop().unwrap() {
        SideEffect::FetchDetail { seq, .. } => seq,
        other => panic!("unexpected effect: {other:?}"),
    };
    let second = match update(&mut state, Action::Select).pop().unwrap() {
        SideEffect::FetchDetail { seq, .. } => seq,
        other => panic!("unexpected effect: {other:?}"),
    };
    assert!(second > first);

    // Slow first response lands after the second fetch started.
    update(
        &mut state,
        Action::DataLoaded(DataPayload::Detail {
            seq: first,
            detail: RecipeDetail::Local(make_local("1", "First")),
        }),
    );
    assert_eq!(state.overlay, Some(DetailState::Loading));

    update(
        &mut state,
        Action::DataLoaded(DataPayload::Detail {
            seq: second,
            detail: RecipeDetail::Local(make_local("2", "Second")),
        }),
    );
    match &state.overlay {
        Some(DetailState::Loaded(detail)) => assert_eq!(detail.name(), "Second"),
        other => panic!("unexpected overlay state: {other:?}"),
    }
}

#[test]
fn test_detail_response_after_overlay_closed_is_ignored() {
    let mut state = make_state();
    state.collection = vec![make_card(Source::Local, "1", "Soup")];

    let seq = match update(&mut state, Action::Select).pop().unwrap() {
        SideEffect::FetchDetail { seq, .. } => seq,
        other => panic!("unexpected effect: {other:?}"),
    };
    update(&mut state, Action::Back);
    assert!(state.overlay.is_none());

    update(
        &mut state,
        Action::DataLoaded(DataPayload::Detail {
            seq,
            detail: RecipeDetail::Local(make_local("1", "Soup")),
        }),
    );
    assert!(state.overlay.is_none());
}

#[test]
fn test_detail_failure_shows_inline_error() {
    let mut state = make_state();
    state.collection = vec![make_card(Source::Local, "1", "Soup")];

    let seq = match update(&mut state, Action::Select).pop().unwrap() {
        SideEffect::FetchDetail { seq, .. } => seq,
        other => panic!("unexpected effect: {other:?}"),
    };
    update(
        &mut state,
        Action::LoadError(FetchError::Detail {
            seq,
            message: "Could not load recipe details.".into(),
        }),
    );
    assert_eq!(
        state.overlay,
        Some(DetailState::Failed("Could not load recipe details.".into()))
    );
    // Banner untouched
    assert!(state.message.is_none());
}

#[test]
fn test_stale_detail_failure_is_dropped() {
    let mut state = make_state();
    state.collection = vec![make_card(Source::Local, "1", "Soup")];

    let seq = match update(&mut state, Action::Select).pop().unwrap() {
        SideEffect::FetchDetail { seq, .. } => seq,
        other => panic!("unexpected effect: {other:?}"),
    };
    update(
        &mut state,
        Action::DataLoaded(DataPayload::Detail {
            seq,
            detail: RecipeDetail::Local(make_local("1", "Soup")),
        }),
    );

    // A failure from an older fetch must not clobber the loaded view.
    update(
        &mut state,
        Action::LoadError(FetchError::Detail {
            seq: seq - 1,
            message: "boom".into(),
        }),
    );
    assert!(matches!(state.overlay, Some(DetailState::Loaded(_))));
}

// --- Add form ---

#[test]
fn test_submit_empty_form_is_rejected_before_any_request() {
    let mut state = make_state();
    update(&mut state, Action::OpenAddForm);

    let effects = update(&mut state, Action::SubmitForm);
    assert!(effects.is_empty());
    assert_eq!(state.input_mode, InputMode::AddForm);
    assert_eq!(
        state.message.as_ref().unwrap().text,
        "Please fill in all required fields."
    );
}

#[test]
fn test_submit_valid_form_issues_create_with_placeholder_image() {
    let mut state = make_state();
    update(&mut state, Action::OpenAddForm);
    for c in "Toast".chars() {
        update(&mut state, Action::FormInput(c));
    }
    update(&mut state, Action::FormNextField);
    for c in "bread, butter".chars() {
        update(&mut state, Action::FormInput(c));
    }
    update(&mut state, Action::FormNextField);
    for c in "toast it".chars() {
        update(&mut state, Action::FormInput(c));
    }

    let effects = update(&mut state, Action::SubmitForm);
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        SideEffect::CreateRecipe(recipe) => {
            assert_eq!(recipe.name, "Toast");
            assert_eq!(recipe.ingredients, vec!["bread", "butter"]);
            assert_eq!(recipe.instructions, "toast it");
            assert_eq!(recipe.image, "https://example.com/placeholder.png");
        }
        other => panic!("unexpected effect: {other:?}"),
    }
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn test_create_success_refreshes_collection() {
    let mut state = make_state();
    state.view = ResultsView::Search;

    let effects = update(&mut state, Action::DataLoaded(DataPayload::Created));
    assert_eq!(effects, vec![SideEffect::LoadCollection]);
    assert_eq!(state.view, ResultsView::Collection);
    assert_eq!(state.message.as_ref().unwrap().text, "Recipe added successfully!");
}

#[test]
fn test_create_failure_shows_banner() {
    let mut state = make_state();
    update(
        &mut state,
        Action::LoadError(FetchError::Create("Failed to add recipe. Try again.".into())),
    );
    assert_eq!(
        state.message.as_ref().unwrap().text,
        "Failed to add recipe. Try again."
    );
}

#[test]
fn test_cancel_add_form_resets_fields() {
    let mut state = make_state();
    update(&mut state, Action::OpenAddForm);
    update(&mut state, Action::FormInput('x'));

    update(&mut state, Action::Back);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(state.add_form.name.is_empty());
}

// --- Navigation & chrome ---

#[test]
fn test_switch_to_collection_refetches() {
    let mut state = make_state();
    state.view = ResultsView::Search;

    let effects = update(&mut state, Action::SwitchView);
    assert_eq!(state.view, ResultsView::Collection);
    assert_eq!(effects, vec![SideEffect::LoadCollection]);
}

#[test]
fn test_switch_to_search_does_not_fetch() {
    let mut state = make_state();
    assert_eq!(state.view, ResultsView::Collection);

    let effects = update(&mut state, Action::SwitchView);
    assert_eq!(state.view, ResultsView::Search);
    assert!(effects.is_empty());
}

#[test]
fn test_refresh_in_search_view_reruns_last_query() {
    let mut state = make_state();
    state.view = ResultsView::Search;
    state.last_query = Some("pasta".into());

    let effects = update(&mut state, Action::Refresh);
    assert_eq!(effects, vec![SideEffect::SearchCatalog("pasta".into())]);
}

#[test]
fn test_refresh_in_search_view_without_query_is_a_no_op() {
    let mut state = make_state();
    state.view = ResultsView::Search;

    let effects = update(&mut state, Action::Refresh);
    assert!(effects.is_empty());
}

#[test]
fn test_cursor_clamps_at_list_end() {
    let mut state = make_state();
    state.collection = vec![
        make_card(Source::Local, "1", "A"),
        make_card(Source::Local, "2", "B"),
    ];

    update(&mut state, Action::MoveDown);
    update(&mut state, Action::MoveDown);
    update(&mut state, Action::MoveDown);
    assert_eq!(state.cursor, 1);

    update(&mut state, Action::MoveUp);
    update(&mut state, Action::MoveUp);
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_collection_reload_clamps_cursor() {
    let mut state = make_state();
    state.collection = vec![
        make_card(Source::Local, "1", "A"),
        make_card(Source::Local, "2", "B"),
    ];
    state.cursor = 1;

    update(
        &mut state,
        Action::DataLoaded(DataPayload::Collection(vec![make_local("1", "A")])),
    );
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_move_keys_scroll_open_overlay() {
    let mut state = make_state();
    state.collection = vec![make_card(Source::Local, "1", "Soup")];
    update(&mut state, Action::Select);

    update(&mut state, Action::MoveDown);
    update(&mut state, Action::MoveDown);
    assert_eq!(state.detail_scroll, 2);
    assert_eq!(state.cursor, 0);

    update(&mut state, Action::MoveUp);
    assert_eq!(state.detail_scroll, 1);
}

#[test]
fn test_random_recipe_opens_loading_overlay() {
    let mut state = make_state();
    let effects = update(&mut state, Action::RandomRecipe);
    assert!(matches!(effects[0], SideEffect::FetchRandom { .. }));
    assert_eq!(state.overlay, Some(DetailState::Loading));
}

#[test]
fn test_open_in_browser_uses_catalog_source_link() {
    let mut state = make_state();
    state.collection = vec![make_card(Source::Local, "1", "Soup")];
    let seq = match update(&mut state, Action::Select).pop().unwrap() {
        SideEffect::FetchDetail { seq, .. } => seq,
        other => panic!("unexpected effect: {other:?}"),
    };

    // Local recipes have no outbound link.
    update(
        &mut state,
        Action::DataLoaded(DataPayload::Detail {
            seq,
            detail: RecipeDetail::Local(make_local("1", "Soup")),
        }),
    );
    assert!(update(&mut state, Action::OpenInBrowser).is_empty());
}

#[test]
fn test_toggle_theme_flips_mode() {
    let mut state = make_state();
    assert_eq!(state.theme_mode, ThemeMode::Dark);
    update(&mut state, Action::ToggleTheme);
    assert_eq!(state.theme_mode, ThemeMode::Light);
    update(&mut state, Action::ToggleTheme);
    assert_eq!(state.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_back_clears_banner_in_normal_mode() {
    let mut state = make_state();
    state.set_message("Recipe deleted.", MessageKind::Info);
    update(&mut state, Action::Back);
    assert!(state.message.is_none());
}

#[test]
fn test_add_form_trims_and_defaults_image() {
    use mealdash::app::state::AddForm;

    let mut form = AddForm::default();
    assert!(form.build("ph.png").is_none());

    form.name = "  Toast  ".into();
    form.ingredients = " bread , butter ,,".into();
    form.instructions = "toast it".into();

    let recipe = form.build("ph.png").unwrap();
    assert_eq!(recipe.name, "Toast");
    assert_eq!(recipe.ingredients, vec!["bread", "butter"]);
    assert_eq!(recipe.image, "ph.png");

    form.image = " https://img/x.png ".into();
    let recipe = form.build("ph.png").unwrap();
    assert_eq!(recipe.image, "https://img/x.png");
}

#[test]
fn test_quit_sets_flag() {
    let mut state = make_state();
    update(&mut state, Action::Quit);
    assert!(state.should_quit);
}
