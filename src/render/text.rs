use super::{lines, INSTRUCTIONS_FALLBACK};
use crate::model::{RecipeDetail, RecipeSummary};

/// One grid line, numbered from 1
pub fn card(position: usize, recipe: &RecipeSummary) -> String {
    format!("{:>3}. {} (#{})", position, recipe.name, recipe.id)
}

pub fn detail(recipe: &RecipeDetail) -> String {
    let mut out = vec![
        recipe.name.clone(),
        "=".repeat(recipe.name.chars().count()),
    ];

    if let Some(category) = &recipe.category {
        out.push(format!("Category: {}", category));
    }
    if let Some(area) = &recipe.area {
        out.push(format!("Area: {}", area));
    }
    if !recipe.thumbnail.is_empty() {
        out.push(format!("Image: {}", recipe.thumbnail));
    }

    let ingredients = recipe.ingredients();
    if !ingredients.is_empty() {
        out.push(String::new());
        out.push("Ingredients".to_string());
        out.extend(ingredients.iter().map(|i| format!("  - {}", i)));
    }

    out.push(String::new());
    out.push("Instructions".to_string());
    match recipe.instructions.as_deref() {
        Some(text) => out.extend(lines(text).map(str::to_string)),
        None => out.push(INSTRUCTIONS_FALLBACK.to_string()),
    }

    out.join("\n")
}
