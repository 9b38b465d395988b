mod color_mode;

use crate::filter::SortOrder;
use crate::highlight::FilterColor;
use clap::{ArgAction, Parser, Subcommand};
pub use color_mode::ColorMode;
use std::path::PathBuf;

/// Keep the lines of a text file that match a set of named filters, and show
/// them with each filter's matches highlighted
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Filter file to use instead of config_<FILE> next to the source
    #[arg(short, long, global = true, env = "CHIP_FILTERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the filtered lines instead of filtered_<FILE>
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Order of the filtered lines
    #[arg(long, value_enum, default_value_t = SortOrder::Natural, global = true)]
    pub sort: SortOrder,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a filter; it is refused if no line matches it
    Add {
        /// Source text file
        file: PathBuf,

        /// Text to look for
        pattern: String,

        /// Match upper/lower case exactly
        #[arg(long)]
        match_case: bool,

        /// Only match whole words
        #[arg(long)]
        match_word: bool,

        /// Treat the pattern as a regular expression
        #[arg(long)]
        regex: bool,

        /// Highlight color
        #[arg(long = "paint", value_enum, default_value_t = FilterColor::Blue)]
        paint: FilterColor,
    },
    /// Delete a filter
    Remove {
        /// Source text file
        file: PathBuf,

        /// Name of the filter
        pattern: String,
    },
    /// Change the flags of a filter
    Set {
        /// Source text file
        file: PathBuf,

        /// Name of the filter
        pattern: String,

        /// Enable or disable the filter
        #[arg(long)]
        checked: Option<bool>,

        /// Match upper/lower case exactly
        #[arg(long)]
        match_case: Option<bool>,

        /// Only match whole words
        #[arg(long)]
        match_word: Option<bool>,

        /// Treat the pattern as a regular expression
        #[arg(long)]
        regex: Option<bool>,
    },
    /// Change the highlight color of a filter
    Paint {
        /// Source text file
        file: PathBuf,

        /// Name of the filter
        pattern: String,

        /// New color
        #[arg(value_enum, id = "new_color", value_name = "COLOR")]
        color: FilterColor,
    },
    /// List the filters of a file
    List {
        /// Source text file
        file: PathBuf,
    },
    /// Print the filtered lines with highlights and write them to disk
    Show {
        /// Source text file
        file: PathBuf,

        /// Print only, leave the filtered file untouched
        #[arg(long)]
        no_write: bool,
    },
    /// Print the source line number of a line from the filtered view
    Locate {
        /// Source text file
        file: PathBuf,

        /// Exact text of the filtered line
        text: String,
    },
}

impl Commands {
    pub fn file(&self) -> &PathBuf {
        match self {
            Commands::Add { file, .. }
            | Commands::Remove { file, .. }
            | Commands::Set { file, .. }
            | Commands::Paint { file, .. }
            | Commands::List { file }
            | Commands::Show { file, .. }
            | Commands::Locate { file, .. } => file,
        }
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
