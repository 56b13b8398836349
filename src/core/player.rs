//! Player module - hands playback to mpv or vlc

use crate::error::{GalleryError, Result};
use crate::types::{PlayOptions, PlayerType};
use log::info;
use std::process::Stdio;
use tokio::process::Command;

/// Build the player's argument list for a video URL
pub fn build_args(player: PlayerType, url: &str, options: &PlayOptions) -> Vec<String> {
    let mut args = Vec::new();

    match player {
        PlayerType::Mpv => {
            args.push("--really-quiet".to_string());
            if options.muted {
                args.push("--mute=yes".into());
            }
            if options.fullscreen {
                args.push("--fs".into());
            }
            if let Some(start) = options.start_at {
                args.push(format!("--start={}", start.max(0.0)));
            }
        }
        PlayerType::Vlc => {
            args.push("--play-and-exit".to_string());
            if options.muted {
                args.push("--no-audio".into());
            }
            if options.fullscreen {
                args.push("--fullscreen".into());
            }
            if let Some(start) = options.start_at {
                args.push(format!("--start-time={}", start.max(0.0)));
            }
        }
    }

    args.push(url.to_string());
    args
}

/// Play a video with the configured player, waiting until it exits
pub async fn play(player: PlayerType, url: &str, options: &PlayOptions) -> Result<()> {
    let cmd = player.command();
    if !is_command_available(cmd).await {
        return Err(GalleryError::MissingDependency(cmd.into()));
    }

    info!("Starting {} for {}", cmd, url);

    let status = Command::new(cmd)
        .args(build_args(player, url, options))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| GalleryError::Spawn(format!("Failed to start {}: {}", cmd, e)))?;

    if !status.success() {
        // mpv exits with 4 when the user quits with q
        if !(player == PlayerType::Mpv && status.code() == Some(4)) {
            return Err(GalleryError::Spawn(format!(
                "{} exited with code: {:?}",
                cmd,
                status.code()
            )));
        }
    }

    Ok(())
}

/// Format a playback position as m:ss
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Check if a command is available in PATH
async fn is_command_available(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .await
        .map(|o| o.status.success())
        .unwrap_or(false)
}
