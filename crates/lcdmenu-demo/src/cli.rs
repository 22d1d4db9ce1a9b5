#![forbid(unsafe_code)]

//! Command-line argument parsing for the menu demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `LCDMENU_DEMO_*` prefix.

use std::env;
use std::process;

use lcdmenu::MenuStyle;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
lcdmenu demo: a 128x64 icon menu previewed in the terminal

USAGE:
    lcdmenu-demo [OPTIONS]

OPTIONS:
    --style=NAME       Layout style: list, wii, dsi or vertical (default: list)
    --position=N       Initially selected item, 0-indexed (default: 0)
    --log-file=PATH    Write trace output to PATH (default: lcdmenu-demo.log)
    --help, -h         Show this help message
    --version, -V      Show version

KEYBINDINGS:
    Arrow keys      Move the selection
    Enter           Activate the selected item
    1-4             Switch layout: list, wii, dsi, vertical
    q / Esc         Quit

ENVIRONMENT VARIABLES:
    LCDMENU_DEMO_STYLE       Override --style
    LCDMENU_DEMO_POSITION    Override --position
    LCDMENU_DEMO_LOG_FILE    Override --log-file
    RUST_LOG                 Trace filter (default: info)";

/// Parsed command-line options.
pub struct Opts {
    /// Starting layout style.
    pub style: MenuStyle,
    /// Initially selected item.
    pub position: usize,
    /// Trace output destination.
    pub log_file: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            style: MenuStyle::List,
            position: 0,
            log_file: "lcdmenu-demo.log".into(),
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("LCDMENU_DEMO_STYLE")
            && let Ok(style) = val.parse()
        {
            opts.style = style;
        }
        if let Ok(val) = env::var("LCDMENU_DEMO_POSITION")
            && let Ok(n) = val.parse()
        {
            opts.position = n;
        }
        if let Ok(val) = env::var("LCDMENU_DEMO_LOG_FILE") {
            opts.log_file = val;
        }

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("lcdmenu-demo {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--style=") {
                        match val.parse() {
                            Ok(style) => opts.style = style,
                            Err(err) => {
                                eprintln!("Invalid --style value: {err}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--position=") {
                        match val.parse() {
                            Ok(n) => opts.position = n,
                            Err(_) => {
                                eprintln!("Invalid --position value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = val.to_string();
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}

/// Map a digit key to a layout style.
#[must_use]
pub fn style_for_digit(c: char) -> Option<MenuStyle> {
    match c {
        '1' => Some(MenuStyle::List),
        '2' => Some(MenuStyle::Wii),
        '3' => Some(MenuStyle::Dsi),
        '4' => Some(MenuStyle::Vertical),
        _ => None,
    }
}
