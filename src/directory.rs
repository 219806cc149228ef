//! User directory module
//!
//! Maps usernames to the display name shown after login.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

static USER_DIRECTORY: RwLock<Option<HashMap<String, String>>> = RwLock::new(None);

/// Demo accounts used until a directory file is loaded.
const DEMO_USERS: [(&str, &str); 6] = [
    ("student", "John Doe"),
    ("student2", "Sarah Smith"),
    ("teacher", "Mr. Anderson"),
    ("teacher2", "Ms. Wilson"),
    ("admin", "Dr. Principal"),
    ("admin2", "Mrs. Administrator"),
];

const UNKNOWN_DISPLAY_NAME: &str = "User";

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User directory file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read user directory file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("User directory file is empty")]
    EmptyFile,
    #[error("Malformed user directory entry on line {line}, expected `username = Display Name`")]
    MalformedLine { line: usize },
}

/// Returns the user directory file path.
///
/// Priority:
/// 1. Environment variable `SCHOOL_USER_DIRECTORY_PATH`
/// 2. Default path `./assets/users.txt`
pub fn get_directory_path() -> PathBuf {
    std::env::var("SCHOOL_USER_DIRECTORY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/users.txt"))
}

/// Initializes the user directory from the configured file.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, is empty or
/// contains a line that is not `username = Display Name`.
pub fn init_user_directory() -> Result<usize, DirectoryError> {
    let path = get_directory_path();
    init_user_directory_from_path(&path)
}

/// Initializes the user directory from a specific file path.
///
/// The first successful initialization wins; later calls return the number
/// of entries already loaded.
///
/// ```rust,ignore
/// let count = school_credentials::init_user_directory_from_path("/etc/school/users.txt")?;
/// ```
pub fn init_user_directory_from_path<P: AsRef<Path>>(path: P) -> Result<usize, DirectoryError> {
    {
        let guard = USER_DIRECTORY.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(directory) = guard.as_ref() {
            return Ok(directory.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("User directory initialization FAILED: FileNotFound {:?}", path);
        return Err(DirectoryError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let directory = parse_directory(&content)?;

    let count = directory.len();
    {
        let mut guard = USER_DIRECTORY.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(directory);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("User directory initialized: {} users from {:?}", count, path);

    Ok(count)
}

fn parse_directory(content: &str) -> Result<HashMap<String, String>, DirectoryError> {
    let mut directory = HashMap::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (username, name) = line
            .split_once('=')
            .map(|(u, n)| (u.trim(), n.trim()))
            .filter(|(u, n)| !u.is_empty() && !n.is_empty())
            .ok_or(DirectoryError::MalformedLine { line: idx + 1 })?;

        directory.insert(username.to_lowercase(), name.to_string());
    }

    if directory.is_empty() {
        return Err(DirectoryError::EmptyFile);
    }
    Ok(directory)
}

/// Returns the display name for a username (case-insensitive).
///
/// Falls back to the demo accounts when no directory file has been loaded,
/// and to `"User"` for unknown usernames.
pub fn display_name(username: &str) -> String {
    let key = username.to_lowercase();
    let guard = USER_DIRECTORY.read().unwrap_or_else(PoisonError::into_inner);

    let name = match guard.as_ref() {
        Some(directory) => directory.get(&key).map(String::as_str),
        None => DEMO_USERS
            .iter()
            .find(|(user, _)| *user == key)
            .map(|(_, name)| *name),
    };
    name.unwrap_or(UNKNOWN_DISPLAY_NAME).to_string()
}

/// Resets the user directory for testing purposes.
#[cfg(test)]
pub fn reset_user_directory_for_testing() {
    let mut guard = USER_DIRECTORY.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
