//! Terminal presentation: menus and labels

pub mod dialoguer_selector;
pub mod fzf;
pub mod render;
pub mod selector;
