//! Path utilities for the Zellij sandbox environment.
//!
//! Zellij plugins see the host filesystem mounted under `/host`, pointing at
//! the cwd of the last focused terminal (or where Zellij was started). When
//! Zellij runs from a home-directory terminal, the data directory below
//! resolves to `~/.local/share/zellij/zshelf`.

use std::path::PathBuf;

/// Returns the data directory holding zshelf's persisted state.
///
/// Contains the two value files (`search.json`, `favorites.json`) and the
/// trace output file.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zshelf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_sandbox_mount() {
        assert_eq!(
            data_dir(),
            PathBuf::from("/host/.local/share/zellij/zshelf")
        );
    }
}
