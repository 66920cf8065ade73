//! Formatting utilities for displaying music metadata.

/// Formats time values into human-readable strings.
///
/// Converts numeric time values (in seconds) to formatted strings like
/// "1:23" or "1:23:45".
pub trait TimeFormat {
    /// Converts the time value to a formatted string.
    fn into_formatted(self) -> String;
}

impl TimeFormat for u32 {
    fn into_formatted(self) -> String {
        u64::from(self).into_formatted()
    }
}

impl TimeFormat for u64 {
    fn into_formatted(self) -> String {
        let hours = self / 60 / 60;
        let minutes = self / 60 % 60;
        let seconds = self % 60;

        if hours > 0 {
            format!("{hours}:{minutes:0>2}:{seconds:0>2}")
        } else {
            format!("{minutes}:{seconds:0>2}")
        }
    }
}
