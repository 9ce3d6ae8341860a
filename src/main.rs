//! Folio - Render Markdown to embeddable HTML.
//!
//! This binary provides the CLI interface to the folio library: it reads
//! Markdown from files or stdin and writes HTML fragments (or standalone
//! pages) to stdout.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use folio_config::Config;
use folio_core::{FolioError, Result};
use folio_render::{render_page, Renderer};
use folio_syntax::{load_themes, stylesheet, Highlighter};
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Folio v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    if cli.css {
        print!("{}", stylesheet(config.highlight.layout));
        return Ok(());
    }

    if cli.list_themes || cli.list_languages {
        return run_listing(cli, &config);
    }

    let renderer = Renderer::from_config(&config)?;
    debug!("Renderer: {:?}", renderer);

    if cli.should_read_stdin() {
        run_stdin(cli, &renderer)
    } else {
        run_files(cli, &renderer)
    }
}

/// Load configuration, then apply the override and command-line flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

/// Print themes and/or languages.
fn run_listing(cli: &Cli, config: &Config) -> Result<()> {
    let themes = load_themes(config.highlight.theme_dir.as_deref())?;
    let highlighter =
        Highlighter::from_theme_set(themes, &config.highlight.light_theme, &config.highlight.dark_theme)?;

    let mut stdout = io::stdout().lock();
    if cli.list_themes {
        let (light, dark) = highlighter.theme_names();
        for name in highlighter.themes() {
            let marker = if name == light {
                "  (light)"
            } else if name == dark {
                "  (dark)"
            } else {
                ""
            };
            writeln!(stdout, "{}{}", name, marker)?;
        }
    }
    if cli.list_languages {
        for (name, identifiers) in highlighter.languages() {
            writeln!(stdout, "{}: {}", name, identifiers.join(", "))?;
        }
    }
    Ok(())
}

/// Render stdin.
fn run_stdin(cli: &Cli, renderer: &Renderer) -> Result<()> {
    info!("Reading from stdin");

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let html = renderer.render_bytes(&input)?;
    emit(cli, renderer, "Document", &html)
}

/// Render each file in turn. A failing file is logged and the rest still run.
fn run_files(cli: &Cli, renderer: &Renderer) -> Result<()> {
    let mut first_error = None;

    for path in &cli.files {
        info!("Processing file: {}", path.display());
        match render_file(renderer, path) {
            Ok(html) => emit(cli, renderer, &page_title(path), &html)?,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn render_file(renderer: &Renderer, path: &Path) -> Result<String> {
    let input = std::fs::read(path)?;
    renderer.render_bytes(&input)
}

/// Write one rendered document to stdout.
fn emit(cli: &Cli, renderer: &Renderer, default_title: &str, html: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if cli.standalone {
        let title = cli.title.as_deref().unwrap_or(default_title);
        write!(stdout, "{}", render_page(title, html, renderer.layout()))?;
    } else {
        writeln!(stdout, "{}", html)?;
    }
    stdout.flush().map_err(FolioError::from)
}

fn page_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string())
}
