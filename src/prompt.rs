use std::sync::OnceLock;

use dialoguer::theme::SimpleTheme;
use dialoguer::{Input, MultiSelect, Select};

static THEME: OnceLock<SimpleTheme> = OnceLock::new();

pub(crate) fn select<P: Into<String>, T: ToString + Clone + PartialEq>(
    prompt: P,
    items: &[T],
    default: Option<T>,
) -> dialoguer::Result<T> {
    let theme = THEME.get_or_init(|| SimpleTheme);
    let mut p = Select::with_theme(theme).with_prompt(prompt).items(items);
    if let Some(default) = default.and_then(|d| items.iter().position(|item| *item == d)) {
        p = p.default(default);
    }
    Ok(items[p.interact()?].clone())
}

pub(crate) fn multi_select<P: Into<String>, T: ToString + Clone + PartialEq>(
    prompt: P,
    items: &[T],
    defaults: &[T],
) -> dialoguer::Result<Vec<T>> {
    let theme = THEME.get_or_init(|| SimpleTheme);
    let mut p = MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items(items);
    if !defaults.is_empty() {
        p = p.defaults(
            &items
                .iter()
                .map(|item| defaults.contains(item))
                .collect::<Vec<bool>>(),
        )
    }
    Ok(p.interact()?.iter().map(|&i| items[i].clone()).collect())
}

pub(crate) fn input(prompt: impl Into<String>) -> dialoguer::Result<String> {
    let theme = THEME.get_or_init(|| SimpleTheme);
    Input::with_theme(theme).with_prompt(prompt).interact_text()
}
