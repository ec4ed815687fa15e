use std::{path::PathBuf, time::Duration};

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    builder, error, info, setlist,
    spotify::SpotifyClient,
    success,
    types::{PlaylistRequest, SetlistTableRow},
    warning,
};

pub async fn create(name: Option<String>, file: Option<PathBuf>, dry_run: bool) {
    let raw_text = match read_setlist(file).await {
        Ok(text) => text,
        Err(e) => error!("Cannot read setlist: {}", e),
    };

    let entries = setlist::normalize(&raw_text);
    if entries.is_empty() {
        warning!("No \"artist - track\" lines found in the input.");
    }

    let table_rows: Vec<SetlistTableRow> = entries
        .iter()
        .map(|e| SetlistTableRow {
            position: e.position,
            artist: e.artist.clone(),
            track: e.track.clone(),
        })
        .collect();
    println!("{}", Table::new(table_rows));

    if dry_run {
        return;
    }

    let playlist_name = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| format!("{} Setlist", Utc::now().format("%Y-%m-%d")));

    let request = PlaylistRequest {
        name: playlist_name.clone(),
        entries,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Resolving {} entries against the catalog...",
        request.entries.len()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let client = SpotifyClient::from_env();
    match builder::build(&request, &client).await {
        Ok(playlist_id) => {
            pb.finish_and_clear();
            success!("Playlist {} created. ID: {}", playlist_name, playlist_id);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to create playlist: {}", e);
        }
    }
}

async fn read_setlist(file: Option<PathBuf>) -> Result<String, String> {
    match file {
        Some(path) => async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string()),
        None => {
            info!("Reading setlist from stdin (Ctrl-D to finish)...");
            std::io::read_to_string(std::io::stdin()).map_err(|e| e.to_string())
        }
    }
}
