//! bookmark-tidy - sort exported browser bookmarks into folders
//!
//! `organize` opens the terminal organizer, `list` prints what a bookmarks
//! file contains, `feed` prints the posts of an RSS feed.

mod app;
mod keybindings;
mod logging;
mod mode;
mod settings;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tidy_core::{Command, Organizer, Outcome};
use tidy_feed::{error_message, render_posts_html, render_posts_text, FeedReader};

use app::App;
use settings::AppSettings;

/// Sort exported browser bookmarks into folders.
#[derive(Parser)]
#[command(name = "bookmark-tidy")]
#[command(about = "Sort exported browser bookmarks into folders")]
#[command(version)]
struct Cli {
    /// Settings file (default: <config dir>/bookmark-tidy/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a bookmarks file and open the terminal organizer
    Organize {
        /// Netscape bookmark HTML exported from a browser
        file: PathBuf,
    },

    /// Import a bookmarks file and print the flattened bookmarks
    List {
        /// Netscape bookmark HTML exported from a browser
        file: PathBuf,

        /// Print the store as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a feed and print its posts
    Feed {
        /// Feed url (overrides the settings file)
        #[arg(long)]
        url: Option<String>,

        /// Print HTML instead of plain text
        #[arg(long)]
        html: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = AppSettings::load(cli.config.as_deref())?;
    logging::init(&settings.log, matches!(cli.command, Commands::Organize { .. }))
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    match cli.command {
        Commands::Organize { file } => organize(&settings, &file),
        Commands::List { file, json } => list(&settings, &file, json),
        Commands::Feed { url, html } => feed(&settings, url, html),
    }
}

fn import(settings: &AppSettings, file: &Path) -> Result<(Organizer, Outcome), Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(file)?;
    let mut organizer = Organizer::new(settings.organizer.clone());
    let outcome = organizer.execute(Command::Import { html });
    Ok((organizer, outcome))
}

fn organize(settings: &AppSettings, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (organizer, outcome) = import(settings, file)?;
    tracing::info!(file = %file.display(), "opening organizer");
    let mut app = App::new(organizer, settings.export_dir.clone());
    if let Outcome::Imported(summary) = outcome {
        app.status_message = Some(format!(
            "Imported {} bookmarks from {}",
            summary.imported,
            file.display()
        ));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}

fn list(settings: &AppSettings, file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (organizer, _) = import(settings, file)?;
    let store = organizer.store();

    if json {
        println!("{}", serde_json::to_string_pretty(store)?);
    } else {
        for bookmark in store.unorganized() {
            println!("{}\t{}", bookmark.title, bookmark.url);
        }
    }
    Ok(())
}

fn feed(settings: &AppSettings, url: Option<String>, html: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = settings.feed.clone();
    if let Some(url) = url {
        config.url = url;
    }

    tracing::debug!(url = %config.url, "loading feed");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(async {
        let reader = FeedReader::new(config)?;
        reader.load().await
    });

    match result {
        Ok(posts) if html => print!("{}", render_posts_html(&posts)),
        Ok(posts) => print!("{}", render_posts_text(&posts)),
        Err(err) => {
            eprintln!("{}", error_message(&err));
            std::process::exit(1);
        }
    }
    Ok(())
}
