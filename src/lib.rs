pub mod cli;
pub mod config;
pub mod correspondence;
pub mod filter;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod session;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use cli::{ColorMode, Commands, cli_parse};
pub use correspondence::{NOT_FOUND, find_line_in_document, find_line_index};
pub use filter::{
    CompiledPattern, FilterError, FilterRule, FilterSet, ProbeOutcome, SortOrder,
    probe_new_filter, select_lines,
};
pub use highlight::{ColoredRange, FilterColor, HighlightMap, MatchSpan, highlight_lines};
pub use session::{AddOutcome, FilterSession, Scan};

/// Files a command reads and writes
struct Paths {
    source: PathBuf,
    config: PathBuf,
    output: PathBuf,
}

impl Paths {
    fn resolve(source: &Path, config: Option<&Path>, output: Option<&Path>) -> Self {
        Self {
            source: source.to_path_buf(),
            config: config
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config::config_path_for(source)),
            output: output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config::filtered_path_for(source)),
        }
    }
}

fn open_session(paths: &Paths, order: SortOrder) -> Result<FilterSession> {
    let text = fs::read_to_string(&paths.source)
        .with_context(|| format!("Failed to read source file '{}'", paths.source.display()))?;
    let rules = config::load_filter_set(&paths.config)?;
    Ok(FilterSession::from_text(&text, rules).with_sort_order(order))
}

/// Save the filters and rewrite the filtered file after a change
fn persist(session: &FilterSession, paths: &Paths, scan: &Scan) -> Result<()> {
    config::save_filter_set(&paths.config, session.rules())?;
    config::write_derived_view(&paths.output, &scan.lines)?;
    Ok(())
}

fn report_failures(scan: &Scan, quiet: bool) {
    if quiet {
        return;
    }
    for failure in &scan.failures {
        eprintln!("Warning: filter skipped: {}", failure);
    }
}

pub fn run() -> Result<()> {
    let cli = cli_parse();
    logging::init_tracing(cli.verbose, cli.quiet)?;
    cli.color.apply();

    let quiet = cli.quiet;
    let paths = Paths::resolve(
        cli.command.file(),
        cli.config.as_deref(),
        cli.output.as_deref(),
    );
    tracing::debug!(
        source = %paths.source.display(),
        config = %paths.config.display(),
        output = %paths.output.display(),
        "resolved paths"
    );

    let mut session = open_session(&paths, cli.sort)?;

    match &cli.command {
        Commands::Add {
            pattern,
            match_case,
            match_word,
            regex,
            paint,
            ..
        } => {
            let rule = FilterRule::new(pattern.as_str())
                .with_match_case(*match_case)
                .with_match_word(*match_word)
                .with_match_regex(*regex)
                .with_color(*paint);

            let outcome = session
                .add_filter(rule)
                .with_context(|| format!("Cannot add filter '{}'", pattern))?;
            persist(&session, &paths, &outcome.scan)?;
            report_failures(&outcome.scan, quiet);

            if !quiet {
                if outcome.promoted {
                    println!("No plain-text match for '{}', using it as a regex", pattern);
                }
                println!(
                    "Added filter '{}' ({} filtered line{})",
                    pattern,
                    outcome.scan.lines.len(),
                    if outcome.scan.lines.len() == 1 { "" } else { "s" }
                );
            }
        }
        Commands::Remove { pattern, .. } => {
            session.remove_filter(pattern)?;
            let scan = session.refresh();
            persist(&session, &paths, &scan)?;
            report_failures(&scan, quiet);
            if !quiet {
                println!("Removed filter '{}'", pattern);
            }
        }
        Commands::Set {
            pattern,
            checked,
            match_case,
            match_word,
            regex,
            ..
        } => {
            // Validate the name before touching anything
            session.rules().get(pattern)?;
            if let Some(value) = checked {
                session.set_checked(pattern, *value)?;
            }
            if let Some(value) = match_case {
                session.set_match_case(pattern, *value)?;
            }
            if let Some(value) = match_word {
                session.set_match_word(pattern, *value)?;
            }
            if let Some(value) = regex {
                session.set_match_regex(pattern, *value)?;
            }
            let scan = session.refresh();
            persist(&session, &paths, &scan)?;
            report_failures(&scan, quiet);
            if !quiet {
                let flags = session.rules().get(pattern)?.flag_signature();
                println!("Filter '{}' is now {}", pattern, flags);
            }
        }
        Commands::Paint { pattern, color, .. } => {
            session.set_color(pattern, *color)?;
            let scan = session.refresh();
            persist(&session, &paths, &scan)?;
            if !quiet {
                println!("Filter '{}' is now {}", pattern, color);
            }
        }
        Commands::List { file } => {
            if session.rules().is_empty() {
                println!("No filters for '{}'", file.display());
            } else {
                println!("{}", render::filter_table(session.rules()));
            }
        }
        Commands::Show { no_write, .. } => {
            let scan = session.refresh();
            report_failures(&scan, quiet);
            if !*no_write {
                config::write_derived_view(&paths.output, &scan.lines)?;
            }
            if !scan.lines.is_empty() {
                println!("{}", render::render_view(&scan.lines, &scan.highlights));
            }
        }
        Commands::Locate { text, .. } => match session.locate(text) {
            Some(index) => println!("{}", index + 1),
            None => {
                if !quiet {
                    eprintln!("No matching line in '{}'", paths.source.display());
                }
            }
        },
    }

    Ok(())
}
