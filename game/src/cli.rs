use std::fmt;

use clap::Parser;

/// Requested window size. A non-positive dimension asks for fullscreen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize {
            width: 800,
            height: 600,
        }
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `1024x768`.
pub fn parse_size(s: &str) -> Result<WindowSize, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width = w
        .parse::<i32>()
        .map_err(|e| format!("invalid width {w:?}: {e}"))?;
    let height = h
        .parse::<i32>()
        .map_err(|e| format!("invalid height {h:?}: {e}"))?;
    Ok(WindowSize { width, height })
}

#[derive(Parser, Debug, Clone)]
#[command(name = "game")]
#[command(about = "Moves a rectangle around with the arrow keys", long_about = None)]
pub struct Cli {
    /// Window size, e.g. 1024x768 (default 800x600). Zero or negative values open a
    /// fullscreen window.
    #[arg(value_name = "WxH", value_parser = parse_size, allow_hyphen_values = true)]
    pub size: Option<WindowSize>,
}

impl Cli {
    pub fn window_size(&self) -> WindowSize {
        self.size.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_sizes_parse_exactly() {
        assert_eq!(
            parse_size("800x600"),
            Ok(WindowSize {
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            parse_size("1x1"),
            Ok(WindowSize {
                width: 1,
                height: 1
            })
        );
        assert_eq!(
            parse_size("0x-1"),
            Ok(WindowSize {
                width: 0,
                height: -1
            })
        );
    }

    #[test]
    fn malformed_sizes_are_rejected() {
        for s in ["abc", "100", "100x", "", "x600", "800x600x", "800 x 600", "99999999999x1"] {
            assert!(parse_size(s).is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn size_defaults_to_800x600() {
        let cli = Cli::try_parse_from(["game"]).unwrap();
        assert_eq!(cli.size, None);
        assert_eq!(
            cli.window_size(),
            WindowSize {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn positional_size_is_parsed() {
        let cli = Cli::try_parse_from(["game", "1024x768"]).unwrap();
        assert_eq!(cli.window_size().to_string(), "1024x768");
    }

    #[test]
    fn negative_size_is_not_taken_for_a_flag() {
        let cli = Cli::try_parse_from(["game", "-1x-1"]).unwrap();
        assert_eq!(
            cli.window_size(),
            WindowSize {
                width: -1,
                height: -1
            }
        );
    }

    #[test]
    fn malformed_argument_is_a_clap_error() {
        for arg in ["abc", "100", "100x", ""] {
            assert!(Cli::try_parse_from(["game", arg]).is_err(), "{arg:?}");
        }
    }
}
