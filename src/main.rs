//! prizeline - Terminal Timeline Explorer for Prize Records
//!
//! Browse prize records by category and free-text query, with a live category distribution.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use prizeline::dataset::{self, Category, Dataset, DatasetSource};
use prizeline::render::ui::{ColorTheme, TerminalUI, ThemeName};
use prizeline::session::SessionState;
use prizeline::stats::{format_distribution, DatasetSummary};
use prizeline::{Application, ViewerConfig};
use std::path::PathBuf;
use std::sync::Arc;

fn cli() -> Command {
    Command::new("prizeline")
        .version(prizeline::VERSION)
        .about("A terminal timeline explorer for historical prize records")
        .long_about(
            "prizeline shows prize records on a year timeline with a per-category \
             distribution. Records can be narrowed by category and by a case-insensitive \
             search over names and motivations.",
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Dataset file (JSON, optionally gzip-compressed); defaults to the bundled data"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .value_name("NAME")
                .action(ArgAction::Append)
                .value_parser(|value: &str| value.parse::<Category>())
                .help("Start with only these categories selected (repeatable)"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("TEXT")
                .help("Initial search text"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("THEME")
                .value_parser(clap::value_parser!(ThemeName))
                .help("Color theme"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .action(ArgAction::SetTrue)
                .help("Print the category distribution and exit"),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; RUST_LOG controls verbosity
    env_logger::init();

    let matches = cli().get_matches();

    // Config file first, command-line flags on top
    let mut config = ViewerConfig::load().context("failed to load configuration")?;
    if let Some(path) = matches.get_one::<PathBuf>("data") {
        config.data_path = Some(path.clone());
    }
    if let Some(theme) = matches.get_one::<ThemeName>("theme") {
        config.theme = *theme;
    }
    let categories: Vec<Category> = matches
        .get_many::<Category>("category")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    if !categories.is_empty() {
        config.categories = Some(categories);
    }

    let mut session = config.initial_session();
    if let Some(query) = matches.get_one::<String>("query") {
        session.set_query(query.clone());
    }

    let source: Arc<dyn DatasetSource> = Arc::from(dataset::source_for(config.data_path()));

    if matches.get_flag("summary") {
        let data = load_or_empty(source.as_ref()).await;
        print!("{}", summary_report(&data, &session));
        return Ok(());
    }

    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from_name(config.theme))?);
    let mut app = Application::new(source, ui_renderer, session, config.poll_interval());

    app.run().await?;

    Ok(())
}

/// Load the dataset for `--summary`, reporting a failure and continuing with no records.
async fn load_or_empty(source: &dyn DatasetSource) -> Dataset {
    match dataset::load(source).await {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Could not load {}: {}", source.describe(), err);
            Dataset::empty()
        }
    }
}

/// Non-interactive report for `--summary`.
fn summary_report(dataset: &Dataset, session: &SessionState) -> String {
    let view = session.derive(dataset);
    format!(
        "{}\n{} shown\n\n{}",
        DatasetSummary::of(dataset).describe(),
        view.len(),
        format_distribution(&view.distribution)
    )
}
