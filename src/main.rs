use std::io::{self, IsTerminal};

use clap::Parser;
use log::info;

use restaurant_menu_rs::cli::Cli;
use restaurant_menu_rs::error::Result;
use restaurant_menu_rs::interface::{LineConsole, TermConsole};
use restaurant_menu_rs::session::Session;
use restaurant_menu_rs::state::{load_catalog, Catalog};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = match &cli.menu {
        Some(path) => load_catalog(path)?,
        None if cli.empty => Catalog::default(),
        None => Catalog::with_defaults(),
    };
    info!("starting with {} menu items", catalog.len());

    if !cli.plain && io::stdin().is_terminal() {
        Session::new(catalog, TermConsole::new()).run()
    } else {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        Session::new(catalog, LineConsole::new(stdin, stdout)).run()
    }
}
