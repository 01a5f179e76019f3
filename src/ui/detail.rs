//! Pure formatting of a recipe record into display lines. No state, no
//! side effects; the same record always renders the same way.

use ratatui::text::{Line, Span};

use crate::api::models::RecipeDetail;
use crate::ui::theme::Theme;

/// Ingredient list items for either record shape. Local recipes list
/// their ingredient strings verbatim; catalog recipes join each measure
/// with its ingredient.
pub fn ingredient_items(detail: &RecipeDetail) -> Vec<String> {
    match detail {
        RecipeDetail::Local(r) => r.ingredients.clone(),
        RecipeDetail::Catalog(r) => r.ingredients.iter().map(|i| i.display()).collect(),
    }
}

/// Full overlay body for a loaded recipe.
pub fn detail_lines(detail: &RecipeDetail, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        detail.name().to_string(),
        theme.header,
    ))];

    if let RecipeDetail::Catalog(r) = detail {
        let mut meta = Vec::new();
        if let Some(category) = &r.category {
            meta.push(category.clone());
        }
        if let Some(area) = &r.area {
            meta.push(area.clone());
        }
        if !meta.is_empty() {
            lines.push(Line::from(Span::styled(meta.join(" | "), theme.dim)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ingredients".to_string(),
        theme.header,
    )));
    for item in ingredient_items(detail) {
        lines.push(Line::from(format!("  - {item}")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Instructions".to_string(),
        theme.header,
    )));
    for paragraph in detail.instructions().split(['\r', '\n']) {
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            lines.push(Line::from(paragraph.to_string()));
        }
    }

    if let Some(link) = detail.link() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Source: ".to_string(), theme.dim),
            Span::raw(link.to_string()),
        ]));
    }

    lines
}
