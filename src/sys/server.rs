use crate::events::AppEvent;
use async_channel::Sender;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::net::UnixListener;

pub async fn run_server(tx: Sender<AppEvent>, socket_path: PathBuf) {
    if let Err(e) = clear_stale_socket(&socket_path) {
        log::warn!("Failed to remove old socket: {}", e);
    }

    let listener = match UnixListener::bind(&socket_path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", socket_path.display(), e);
            return;
        }
    };
    log::info!("Listening on {}", socket_path.display());

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    forward_commands(stream, tx).await;
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

/// Removes a socket left behind by a previous run. Returns whether one existed.
fn clear_stale_socket(path: &Path) -> std::io::Result<bool> {
    if fs_err::symlink_metadata(path).is_err() {
        return Ok(false);
    }
    fs_err::remove_file(path)?;
    Ok(true)
}

/// Forwards every recognized line until the peer hangs up or the GUI is gone.
async fn forward_commands<R: AsyncRead + Unpin>(stream: R, tx: Sender<AppEvent>) {
    let mut lines = BufReader::new(stream).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        match AppEvent::parse(&line) {
            Some(event) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            None => log::warn!("Unknown command '{}'", line.trim()),
        }
    }
}
