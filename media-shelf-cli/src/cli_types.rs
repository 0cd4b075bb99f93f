//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use media_shelf_lib::{MediaKind, MediaPatch, SearchField, VariantFilter};

#[derive(Parser)]
#[command(name = "media-shelf")]
#[command(about = "Manage a catalog of audio and video records", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the configured or standard location)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields shared by every new record.
#[derive(Args, Clone)]
pub(crate) struct CommonFields {
    /// Unique catalog code
    #[arg(long)]
    pub code: String,

    #[arg(long)]
    pub title: String,

    /// Encoding or container, e.g. MP3, FLAC, MKV
    #[arg(long)]
    pub format: String,

    /// Release year (1900 to the current year)
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    /// List price; a decimal comma is accepted (9,99)
    #[arg(long, value_parser = parse_price, allow_negative_numbers = true)]
    pub price: f64,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommand),

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Commands that work on the loaded catalog.
#[derive(Subcommand)]
pub(crate) enum CatalogCommand {
    /// List catalog items
    List {
        /// Only show one kind
        #[arg(short, long)]
        kind: Option<KindArg>,
    },

    /// Add an audio record
    AddAudio {
        #[command(flatten)]
        common: CommonFields,

        /// Composer or writer
        #[arg(long)]
        author: String,

        /// Singer or band
        #[arg(long)]
        performer: String,

        /// Length in seconds
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,
    },

    /// Add a video record
    AddVideo {
        #[command(flatten)]
        common: CommonFields,

        #[arg(long)]
        director: String,

        #[arg(long)]
        main_actor: String,
    },

    /// Remove the item with the given code
    Remove {
        code: String,
    },

    /// Change selected fields of an item; omitted fields stay as they are
    Edit {
        code: String,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Show items of one kind ordered by price
    ByPrice {
        #[arg(short, long, default_value = "video")]
        kind: KindArg,
    },

    /// Search by title, performer, director, or any text field
    Search {
        /// Text to look for (case-insensitive); omit to list every candidate
        #[arg(default_value = "")]
        text: String,

        #[arg(short, long, default_value = "all")]
        kind: FilterArg,

        #[arg(short, long, default_value = "any")]
        field: FieldArg,
    },

    /// Show item counts
    Stats,
}

#[derive(Args, Clone, Default)]
pub(crate) struct EditFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub format: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    #[arg(long, value_parser = parse_price, allow_negative_numbers = true)]
    pub price: Option<f64>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub performer: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub duration: Option<i64>,

    #[arg(long)]
    pub director: Option<String>,

    #[arg(long)]
    pub main_actor: Option<String>,
}

impl EditFields {
    pub fn into_patch(self) -> MediaPatch {
        MediaPatch {
            title: self.title,
            format: self.format,
            year: self.year,
            price: self.price,
            author: self.author,
            performer: self.performer,
            duration_seconds: self.duration,
            director: self.director,
            main_actor: self.main_actor,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the database path in use
    Show,

    /// Print the settings file path
    Path,

    /// Store a database path in the settings file
    SetDb {
        path: PathBuf,
    },

    /// Remove the stored database path
    ClearDb,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Audio,
    Video,
}

impl From<KindArg> for MediaKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Audio => MediaKind::Audio,
            KindArg::Video => MediaKind::Video,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FilterArg {
    Audio,
    Video,
    All,
}

impl From<FilterArg> for VariantFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Audio => VariantFilter::Audio,
            FilterArg::Video => VariantFilter::Video,
            FilterArg::All => VariantFilter::All,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FieldArg {
    Title,
    Performer,
    Director,
    Any,
}

impl From<FieldArg> for SearchField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Title => SearchField::Title,
            FieldArg::Performer => SearchField::Performer,
            FieldArg::Director => SearchField::Director,
            FieldArg::Any => SearchField::Unfiltered,
        }
    }
}

/// Parse a price, accepting either `.` or `,` as the decimal separator.
fn parse_price(s: &str) -> Result<f64, String> {
    s.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_price_accepts_decimal_comma() {
        assert_eq!(parse_price("9,99"), Ok(9.99));
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
        assert!(parse_price("cheap").is_err());
    }

    #[test]
    fn test_edit_fields_map_to_patch() {
        let cli = Cli::try_parse_from([
            "media-shelf",
            "edit",
            "V1",
            "--price",
            "4,50",
            "--director",
            "Ann Lee",
        ])
        .unwrap();
        let Commands::Catalog(CatalogCommand::Edit { code, fields }) = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(code, "V1");
        let patch = fields.into_patch();
        assert_eq!(patch, MediaPatch::new().price(4.5).director("Ann Lee"));
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["media-shelf", "search"]).unwrap();
        let Commands::Catalog(CatalogCommand::Search { text, kind, field }) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(text, "");
        assert_eq!(VariantFilter::from(kind), VariantFilter::All);
        assert_eq!(SearchField::from(field), SearchField::Unfiltered);
    }
}
