use crate::menu::Link;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Refusing to open non-absolute link '{0}'")]
    NotAbsolute(Link),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Opens `link` in a new browsing context through the desktop's URL handler.
pub fn open_link(link: &Link) -> Result<(), LaunchError> {
    if !link.is_absolute() {
        return Err(LaunchError::NotAbsolute(link.clone()));
    }

    xdg_open(OsStr::new(link.as_str()))
}

/// Opens a local file with its default application.
pub fn open_path(path: &Path) -> Result<(), LaunchError> {
    xdg_open(path.as_os_str())
}

fn xdg_open(target: &OsStr) -> Result<(), LaunchError> {
    Command::new("xdg-open")
        .arg(target)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_link() {
        let err = open_link(&Link::new("docs/index.html")).unwrap_err();
        assert!(matches!(err, LaunchError::NotAbsolute(_)));
    }
}
