//! Menu backend selection

use super::dialoguer_selector::DialoguerSelector;
use super::fzf::FzfSelector;
use crate::types::{MenuItem, SelectorType};
use log::debug;

/// Interactive menu, backed by fzf or dialoguer
pub enum Selector {
    Fzf(FzfSelector),
    Dialoguer(DialoguerSelector),
}

impl Selector {
    pub fn select<T: Clone>(
        &self,
        items: &[MenuItem<T>],
        prompt: &str,
        header: Option<&str>,
    ) -> Option<T> {
        match self {
            Selector::Fzf(s) => s.select(items, prompt, header),
            Selector::Dialoguer(s) => s.select(items, prompt, header),
        }
    }
}

/// Create the configured selector, falling back to dialoguer when fzf is missing
pub fn create_selector(selector_type: SelectorType) -> Selector {
    match selector_type {
        SelectorType::Fzf => {
            let fzf = FzfSelector::new();
            if fzf.is_available() {
                return Selector::Fzf(fzf);
            }
            debug!("fzf not found, falling back to dialoguer");
            Selector::Dialoguer(DialoguerSelector::new())
        }
        SelectorType::Dialoguer => Selector::Dialoguer(DialoguerSelector::new()),
    }
}
