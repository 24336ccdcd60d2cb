//! ANSI colour and emphasis codes for chart chrome and series.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in `{0}`")]
    InvalidHexDigit(String),
    #[error("hex colour `{0}` must be exactly 6 digits")]
    InvalidHexLength(String),
}

/// Named foreground colours accepted on the command line.
pub const NAMED: [(&str, &str); 10] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("steel", "\x1b[38;2;76;114;176m"),
    ("crimson", "\x1b[38;2;229;9;20m"),
];

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Rgb(u8, u8, u8),
}

impl AnsiCode {
    /// Muted blue used for series unless the user picks another colour.
    pub const fn steel() -> Self {
        Self::Static("\x1b[38;2;76;114;176m")
    }
    pub const fn dim() -> Self {
        Self::Static("\x1b[2m")
    }
    pub const fn bold() -> Self {
        Self::Static("\x1b[1m")
    }
    /// Dark-grey background for the plotting area.
    pub const fn grid_background() -> Self {
        Self::Static("\x1b[48;5;236m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// Parse a colour name or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let key = s.trim().to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == key)
            .map_or_else(|| Self::from_hex(s.trim()), |(_, code)| Ok(Self::Static(*code)))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if !h.is_ascii() {
            return Err(ColorError::InvalidHexDigit(hex.to_owned()));
        }
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.write_str(s),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(AnsiCode::from_name(" Blue ").unwrap(), AnsiCode::Static("\x1b[34m"));
        assert_eq!(AnsiCode::from_name("STEEL").unwrap(), AnsiCode::steel());
    }

    #[test]
    fn hex_colours_become_true_colour_escapes() {
        let c = AnsiCode::from_name("#e50914").unwrap();
        assert_eq!(c, AnsiCode::Rgb(0xe5, 0x09, 0x14));
        assert_eq!(c.to_string(), "\x1b[38;2;229;9;20m");
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(
            AnsiCode::from_name("#12345"),
            Err(ColorError::InvalidHexLength(_))
        ));
        assert!(matches!(
            AnsiCode::from_name("#zz0000"),
            Err(ColorError::InvalidHexDigit(_))
        ));
    }

    #[test]
    fn colorize_appends_reset() {
        let s = colorize(&AnsiCode::bold(), "x");
        assert!(s.starts_with("\x1b[1mx"));
        assert!(s.ends_with("\x1b[0m"));
    }
}
