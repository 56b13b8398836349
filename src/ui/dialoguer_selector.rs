//! dialoguer menu backend, always available

use crate::types::MenuItem;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub struct DialoguerSelector;

impl DialoguerSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select<T: Clone>(
        &self,
        items: &[MenuItem<T>],
        prompt: &str,
        header: Option<&str>,
    ) -> Option<T> {
        if items.is_empty() {
            return None;
        }

        if let Some(header) = header {
            println!("{}", header);
        }

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .max_length(20)
            .interact_opt()
            .ok()
            .flatten()?;

        items.get(selection).map(|item| item.value.clone())
    }
}

/// Prompt for a line of text, pre-filled with `initial`. Empty input is allowed.
pub fn prompt_text(prompt: &str, initial: &str) -> Option<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .ok()
}
