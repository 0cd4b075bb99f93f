//! media-shelf CLI
//!
//! Command-line front end for the audio/video media catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{CatalogCommand, Cli, Commands, ConfigAction};
use media_shelf_lib::{Catalog, SqliteStore};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(cli.db);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDb { path } => commands::config::run_config_set_db(Some(path)),
            ConfigAction::ClearDb => commands::config::run_config_set_db(None),
        },
        Commands::Catalog(command) => {
            let mut catalog = commands::open_catalog(cli.db);
            run_catalog(&mut catalog, command, cli.json)
        }
    }
}

fn run_catalog(
    catalog: &mut Catalog<SqliteStore>,
    command: CatalogCommand,
    json: bool,
) -> Result<(), CliError> {
    match command {
        CatalogCommand::List { kind } => {
            commands::list::run_list(catalog, kind.map(Into::into), json)
        }
        CatalogCommand::AddAudio {
            common,
            author,
            performer,
            duration,
        } => commands::edit::run_add_audio(catalog, common, author, performer, duration),
        CatalogCommand::AddVideo {
            common,
            director,
            main_actor,
        } => commands::edit::run_add_video(catalog, common, director, main_actor),
        CatalogCommand::Remove { code } => commands::edit::run_remove(catalog, &code),
        CatalogCommand::Edit { code, fields } => {
            commands::edit::run_edit(catalog, &code, fields.into_patch())
        }
        CatalogCommand::ByPrice { kind } => {
            commands::list::run_by_price(catalog, kind.into(), json)
        }
        CatalogCommand::Search { text, kind, field } => {
            commands::search::run_search(catalog, kind.into(), field.into(), &text, json)
        }
        CatalogCommand::Stats => commands::list::run_stats(catalog, json),
    }
}
