//! fzf menu backend

use crate::types::MenuItem;
use std::io::Write;
use std::process::{Command, Stdio};

pub struct FzfSelector;

impl FzfSelector {
    pub fn new() -> Self {
        Self
    }

    /// Show `items` in fzf. `None` when the menu is empty or the user cancels.
    pub fn select<T: Clone>(
        &self,
        items: &[MenuItem<T>],
        prompt: &str,
        header: Option<&str>,
    ) -> Option<T> {
        if items.is_empty() {
            return None;
        }

        // One line per item, index first so labels may repeat
        let input: String = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}\t{}", i, item.label.replace('\n', " ")))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!("{} > ", prompt);
        let mut args = vec![
            "--prompt", prompt.as_str(),
            "--height", "60%",
            "--reverse",
            "--ansi",
            "--no-sort",
            "--delimiter", "\t",
            "--with-nth", "2..",
        ];
        if let Some(header) = header {
            args.extend(["--header", header]);
        }

        let mut child = Command::new("fzf")
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .ok()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).ok()?;
        }

        let output = child.wait_with_output().ok()?;
        if !output.status.success() {
            return None;
        }

        parse_choice(&String::from_utf8_lossy(&output.stdout))
            .and_then(|index| items.get(index))
            .map(|item| item.value.clone())
    }

    pub fn is_available(&self) -> bool {
        Command::new("which")
            .arg("fzf")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

/// Index prefix of the line fzf printed
fn parse_choice(stdout: &str) -> Option<usize> {
    stdout.trim().split('\t').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("3\tBig Buck Bunny [9:56]\n"), Some(3));
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("abc\tlabel"), None);
    }
}
