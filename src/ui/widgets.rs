use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::api::models::{RecipeCard, Source};
use crate::app::state::{AppState, DetailState, InputMode, MessageKind, ResultsView};
use crate::ui::detail;
use crate::ui::theme::Theme;

/// Text label for one result card. Local recipes always carry the
/// delete affordance; catalog recipes never do.
pub fn card_label(card: &RecipeCard) -> String {
    match card.source {
        Source::Local => format!("{}  [d: delete]", card.name),
        Source::Catalog => card.name.clone(),
    }
}

pub fn render_search_bar(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let searching = state.input_mode == InputMode::Search;
    let border_style = if searching {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = if searching {
        Line::from(vec![
            Span::raw(state.search_input.clone()),
            Span::styled("▏", theme.border_focused),
        ])
    } else if let Some(query) = &state.last_query {
        Line::from(Span::styled(query.clone(), theme.dim))
    } else {
        Line::from(Span::styled("press / to search the catalog", theme.dim))
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

pub fn render_message(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(message) = &state.message else {
        return;
    };
    let style = match message.kind {
        MessageKind::Info => theme.success,
        MessageKind::Error => theme.error,
        MessageKind::Loading => theme.loading,
    };
    f.render_widget(
        Paragraph::new(Span::styled(message.text.clone(), style)),
        area,
    );
}

pub fn render_results(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let cards = state.visible_cards();
    let title = match state.view {
        ResultsView::Search => format!(" Search Results ({}) ", cards.len()),
        ResultsView::Collection => format!(" My Collection ({}) ", cards.len()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border);

    if cards.is_empty() {
        let hint = match state.view {
            ResultsView::Search => "No results. Press / to search the catalog.",
            ResultsView::Collection => "No saved recipes yet. Press a to add one.",
        };
        f.render_widget(Paragraph::new(hint).style(theme.dim).block(block), area);
        return;
    }

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let badge_style = match card.source {
                Source::Local => theme.badge_local,
                Source::Catalog => theme.badge_catalog,
            };
            let row_style = if i == state.cursor && state.input_mode == InputMode::Normal {
                theme.highlight
            } else {
                ratatui::style::Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", card.source), badge_style),
                Span::styled(card_label(card), row_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.input_mode {
        InputMode::Search => "Enter: search | Esc: cancel",
        InputMode::AddForm => "Tab: next field | Enter: save | Esc: cancel",
        InputMode::Normal if state.overlay.is_some() => {
            "j/k: scroll | o: open source | Esc: close"
        }
        InputMode::Normal => {
            "j/k: move | Enter: details | Tab: view | /: search | a: add | d: delete | m: random | r: refresh | t: theme | q: quit"
        }
    };

    let theme_label = format!(" {} ", state.theme_mode.name());
    let padding = (area.width as usize)
        .saturating_sub(hints.len())
        .saturating_sub(theme_label.len());

    let line = Line::from(vec![
        Span::styled(hints, theme.status_bar),
        Span::styled(" ".repeat(padding), theme.status_bar),
        Span::styled(theme_label, theme.status_bar),
    ]);

    f.render_widget(Paragraph::new(line).style(theme.status_bar), area);
}

pub fn render_detail_overlay(f: &mut Frame, state: &AppState, theme: &Theme) {
    let Some(overlay) = &state.overlay else {
        return;
    };

    let area = centered_rect(f.area(), 80, 80);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Recipe ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused);

    let para = match overlay {
        DetailState::Loading => Paragraph::new("Loading details...")
            .style(theme.loading)
            .block(block),
        DetailState::Failed(message) => Paragraph::new(message.as_str())
            .style(theme.error)
            .wrap(Wrap { trim: false })
            .block(block),
        DetailState::Loaded(recipe) => Paragraph::new(detail::detail_lines(recipe, theme))
            .wrap(Wrap { trim: false })
            .scroll((state.detail_scroll, 0))
            .block(block),
    };

    f.render_widget(para, area);
}

pub fn render_add_form(f: &mut Frame, state: &AppState, theme: &Theme) {
    if state.input_mode != InputMode::AddForm {
        return;
    }

    let area = centered_rect(f.area(), 70, 60);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Recipe ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused);

    let form = &state.add_form;
    let fields = [
        ("Name", &form.name),
        ("Ingredients (comma-separated)", &form.ingredients),
        ("Instructions", &form.instructions),
        ("Image URL (optional)", &form.image),
    ];

    let mut lines = Vec::new();
    for (i, (label, value)) in fields.iter().enumerate() {
        let label_style = if i == form.field {
            theme.header
        } else {
            theme.dim
        };
        lines.push(Line::from(Span::styled(format!("{label}:"), label_style)));
        let mut spans = vec![Span::raw(format!("  {value}"))];
        if i == form.field {
            spans.push(Span::styled("▏", theme.border_focused));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    // Widen before multiplying: u16 math overflows on wide terminals.
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
