use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tempfile::Builder;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to {action} '{}'", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to run command `{command}`")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("command `{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
    #[error(transparent)]
    MiniJinja(#[from] minijinja::Error),
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error("unknown {kind}: '{value}'")]
    UnknownChoice { kind: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn io_error(
    action: &'static str,
    path: impl AsRef<Path>,
) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.as_ref().to_path_buf();
    move |source| Error::Io {
        action,
        path,
        source,
    }
}

pub(crate) fn read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(io_error("read", path))
}

/// Replaces `path` with `contents` through a sibling temporary file. An
/// existing target keeps its permissions; a new one gets 0644 less umask.
pub(crate) fn write_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut file = builder
        .tempfile_in(dir)
        .map_err(io_error("create temporary file in", dir))?;
    file.write_all(contents.as_bytes())
        .map_err(io_error("write", file.path().to_path_buf()))?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_error("set permissions of", file.path().to_path_buf()))?;
    }
    file.persist(path).map_err(|err| io_error("write", path)(err.error))?;
    Ok(())
}

pub(crate) fn remove_if_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(io_error("remove", path)(err)),
    }
}
