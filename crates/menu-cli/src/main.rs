//! Menu explorer command loop

use anyhow::Context;
use clap::{value_parser, Arg, Command as Cli};
use menu_catalog::{AllergenTable, Catalog};
use menu_engine::{ExplorerConfig, Menu, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod command;
mod repl;

use command::Command;
use repl::Reply;

fn main() -> anyhow::Result<()> {
    let matches = Cli::new("menu-explorer")
        .version(menu_engine::VERSION)
        .about("Interactive explorer for configurable menu catalogs")
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .short('c')
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to the catalog JSON document"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("allergens")
                .long("allergens")
                .short('a')
                .value_parser(value_parser!(PathBuf))
                .help("Path to an allergen and ingredient JSON document"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ExplorerConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExplorerConfig::default(),
    };

    let catalog_path = matches
        .get_one::<PathBuf>("catalog")
        .context("--catalog is required")?;
    let catalog = Catalog::from_path(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    tracing::info!("Loaded catalog from {}", catalog_path.display());

    let mut menu = Menu::with_config(catalog, config);
    if let Some(path) = matches.get_one::<PathBuf>("allergens") {
        let table = AllergenTable::from_path(path)
            .with_context(|| format!("loading allergens {}", path.display()))?;
        tracing::info!("Loaded allergens from {}", path.display());
        menu = menu.with_allergens(table);
    }

    let mut session = Session::new(Arc::new(menu));
    run_loop(&mut session, io::stdin().lock(), io::stdout().lock())
}

fn run_loop(session: &mut Session, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    writeln!(out, "Menu Explorer CLI started. Type 'help' for list of commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match repl::execute(session, Command::parse(&line?)) {
            Reply::Output(text) => writeln!(out, "{text}")?,
            Reply::Silent => {}
            Reply::Quit => break,
        }
    }

    writeln!(out, "Exiting.")?;
    Ok(())
}
