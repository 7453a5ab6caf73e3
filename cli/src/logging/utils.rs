//! Helpers for log paths, ANSI stripping, and timestamps.
use std::fs;
use std::path::PathBuf;

/// Strip ANSI escape sequences from a string.
///
/// CSI sequences (`ESC [` up to a final byte in `@`..`~`) are removed
/// whole; any other escape drops itself and the character after it.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next() == Some('[') {
            for inner in chars.by_ref() {
                if ('@'..='~').contains(&inner) {
                    break;
                }
            }
        }
    }
    out
}

/// Return `$XDG_CACHE_HOME/arcus/` (or `~/.cache/arcus/`), creating it if needed.
pub(super) fn arcus_cache_dir() -> Option<PathBuf> {
    let cache_dir = std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| {
            std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .map_or_else(|_| PathBuf::from("."), PathBuf::from)
                .join(".cache")
        },
        PathBuf::from,
    );
    let dir = cache_dir.join("arcus");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Log file for `command` inside [`arcus_cache_dir`].
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(arcus_cache_dir()?.join(format!("{command}.log")))
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_sgr() {
        assert_eq!(strip_ansi("\x1b[33mWARN\x1b[0m  ignored"), "WARN  ignored");
        assert_eq!(
            strip_ansi("\x1b[1;34m==>\x1b[0m \x1b[1mInstalling\x1b[0m"),
            "==> Installing"
        );
    }

    #[test]
    fn strip_ansi_removes_other_escapes() {
        assert_eq!(strip_ansi("\x1b[2Kline"), "line");
        assert_eq!(strip_ansi("\x1b7saved"), "saved");
    }

    #[test]
    fn strip_ansi_plain_text_unchanged() {
        assert_eq!(strip_ansi(""), "");
        assert_eq!(strip_ansi("[PACMAN]: git"), "[PACMAN]: git");
    }

    #[test]
    fn format_utc_time_shape() {
        let s = format_utc_time();
        assert_eq!(s.len(), 8);
        assert_eq!(&s[2..3], ":");
        assert_eq!(&s[5..6], ":");
    }

    #[test]
    fn format_utc_datetime_shape() {
        let s = format_utc_datetime();
        assert_eq!(s.len(), 19);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[10..11], " ");
    }
}
