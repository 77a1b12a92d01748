use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{lines, DETAIL_LOADING, INSTRUCTIONS_FALLBACK};
use crate::model::{RecipeDetail, RecipeSummary};

/// Markup for one grid card; `data-id` is what a click resolves to
pub fn card(recipe: &RecipeSummary) -> String {
    format!(
        r#"<div class="recipe-item" data-id="{id}"><img src="{src}" alt="{alt}" loading="lazy"><h3>{name}</h3></div>"#,
        id = encode_double_quoted_attribute(&recipe.id),
        src = encode_double_quoted_attribute(&recipe.thumbnail),
        alt = encode_double_quoted_attribute(&recipe.name),
        name = encode_text(&recipe.name),
    )
}

pub fn loading() -> String {
    format!("<p>{}</p>", DETAIL_LOADING)
}

pub fn inline_error(message: &str) -> String {
    format!(r#"<p class="message error">{}</p>"#, encode_text(message))
}

/// Instructions paragraph with line breaks kept as `<br>`
pub fn instructions(text: Option<&str>) -> String {
    let body = match text {
        Some(text) => lines(text)
            .map(|line| encode_text(line).into_owned())
            .collect::<Vec<_>>()
            .join("<br>"),
        None => INSTRUCTIONS_FALLBACK.to_string(),
    };
    format!("<h3>Instructions</h3><p>{}</p>", body)
}

/// Full overlay body for a recipe
pub fn detail(recipe: &RecipeDetail) -> String {
    let mut html = format!(
        r#"<h2>{name}</h2><img src="{src}" alt="{alt}">"#,
        name = encode_text(&recipe.name),
        src = encode_double_quoted_attribute(&recipe.thumbnail),
        alt = encode_double_quoted_attribute(&recipe.name),
    );

    if let Some(category) = &recipe.category {
        html.push_str(&format!("<h3>Category: {}</h3>", encode_text(category)));
    }
    if let Some(area) = &recipe.area {
        html.push_str(&format!("<h3>Area: {}</h3>", encode_text(area)));
    }

    let ingredients = recipe.ingredients();
    if !ingredients.is_empty() {
        html.push_str("<h3>Ingredients</h3><ul>");
        for ingredient in &ingredients {
            html.push_str(&format!("<li>{}</li>", encode_text(&ingredient.to_string())));
        }
        html.push_str("</ul>");
    }

    html.push_str(&instructions(recipe.instructions.as_deref()));
    html
}
