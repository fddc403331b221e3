use std::path::PathBuf;

use clap::Parser;

/// Restaurant menu console: manage menu items and price orders interactively.
#[derive(Parser, Debug)]
#[command(name = "restaurant_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the menu from a JSON file instead of the default items.
    #[arg(short, long, conflicts_with = "empty")]
    pub menu: Option<PathBuf>,

    /// Start with an empty menu.
    #[arg(long)]
    pub empty: bool,

    /// Use plain line input even when attached to a terminal.
    #[arg(long)]
    pub plain: bool,

    /// Default log filter (overridden by RUST_LOG).
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["restaurant_menu"]);
        assert!(cli.menu.is_none());
        assert!(!cli.empty);
        assert!(!cli.plain);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_menu_conflicts_with_empty() {
        let result = Cli::try_parse_from(["restaurant_menu", "--menu", "m.json", "--empty"]);
        assert!(result.is_err());
    }
}
