//! # Reel CLI Entry Point
//!
//! This is the main entry point for the Reel TUI application.
//!
//! ## Overview
//!
//! Reel catalogs a content directory (one folder per show, film or series)
//! into a JSON index and lets you browse that catalog in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Use ./index.json and ./content
//! reel
//!
//! # Point at a different catalog
//! reel --index ~/media/index.json --content ~/media/content
//!
//! # Re-scan the content directory before browsing
//! reel --rebuild
//!
//! # Print the catalog and exit
//! reel --list
//! ```
//!
//! ## Architecture
//!
//! 1. **Load**: Read the index, rebuilding it from the content directory if missing
//! 2. **Browse**: Feed terminal events through the navigation state machine
//! 3. **Save**: Write the (key-normalized) index back when the session ends
//!
//! ## Key Bindings
//!
//! ### Library (left pane)
//! - `j` / `Down` - Move selection down
//! - `k` / `Up` - Move selection up
//! - `Enter` - Focus the details pane
//! - `q` / `Ctrl+c` - Quit
//!
//! ### Details (right pane)
//! - `Esc` / `Backspace` - Return focus to the library

use reel::catalog::Index;
use reel::logging;
use reel::ui::{self, keymap, Action, App, Config, Theme};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::path::PathBuf;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    /// Block until the next event. `None` means the stream has ended.
    fn read_event(&mut self) -> Result<Option<Event>>;
}

/// Production event reader backed by crossterm's blocking read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Option<Event>> {
        Ok(Some(
            event::read().context("Failed to read terminal event")?,
        ))
    }
}

/// Reel - browse a catalog of media folders
#[derive(Parser, Debug)]
#[command(name = "reel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Catalog a directory of media folders and browse it", long_about = None)]
struct Args {
    /// Path of the JSON index file
    #[arg(short, long, value_name = "FILE")]
    index: Option<PathBuf>,

    /// Directory containing one folder per catalog entry
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Color theme name
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Rebuild the index from the content directory before browsing
    #[arg(long)]
    rebuild: bool,

    /// Print the catalog and exit without starting the TUI
    #[arg(long)]
    list: bool,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&log_dir);

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));

    let result = run_application(args, Config::load());
    if let Err(ref err) = result {
        tracing::error!(error = %format!("{err:#}"), "exiting with error");
    }

    let _ = panic::take_hook();

    result
}

fn resolve_theme(name: &str) -> &'static Theme {
    Theme::by_name(name).unwrap_or_else(|| {
        tracing::warn!(theme = name, "unknown theme, using default");
        eprintln!("Warning: unknown theme '{}', using default", name);
        Theme::default_theme()
    })
}

fn run_application(args: Args, config: Config) -> Result<()> {
    let index_path = args.index.unwrap_or(config.index_path);
    let content_dir = args.content.unwrap_or(config.content_dir);
    let theme = resolve_theme(args.theme.as_deref().unwrap_or(&config.theme));

    let index = if args.rebuild {
        Index::rebuild(&index_path, &content_dir).with_context(|| {
            format!("Failed to rebuild index from: {}", content_dir.display())
        })?
    } else {
        Index::load(&index_path, &content_dir)
            .with_context(|| format!("Failed to load index: {}", index_path.display()))?
    };

    if args.list {
        print_catalog(&index);
        return Ok(());
    }

    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&index);
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, theme, &mut event_reader);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    let save_result = save_after_session(&index);

    run_result?;
    cleanup_result?;
    save_result?;

    Ok(())
}

/// Write the index back once browsing is over. Write failures are reported
/// as warnings; anything else is returned.
fn save_after_session(index: &Index) -> Result<()> {
    match index.save() {
        Ok(()) => Ok(()),
        Err(err) if err.is_persistence_write() => {
            tracing::warn!(error = %err, "failed to save index after session");
            eprintln!("Warning: {}", err);
            Ok(())
        }
        Err(err) => Err(err).context("Failed to save index"),
    }
}

fn print_catalog(index: &Index) {
    for entry in index.sorted_entries() {
        println!(
            "{}\t{}\t{} episode(s)",
            entry.title,
            entry.key,
            entry.episodes.len()
        );
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Drive the browse session: draw, wait for one event, apply it, repeat.
fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    theme: &Theme,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let size = terminal.size().context("Failed to read terminal size")?;
    app.handle(Action::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        terminal
            .draw(|f| ui::render(f, app, theme))
            .context("Failed to draw terminal UI")?;

        let Some(event) = event_reader.read_event()? else {
            break;
        };

        if let Some(action) = keymap::action_for(&event) {
            app.handle(action);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use reel::catalog::Entry;
    use reel::ui::Focus;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn test_app() -> App {
        App::from_entries(vec![Entry::new("a"), Entry::new("b"), Entry::new("c")])
    }

    fn args(index: PathBuf, content: PathBuf) -> Args {
        Args {
            index: Some(index),
            content: Some(content),
            theme: None,
            rebuild: false,
            list: true,
            log_dir: None,
        }
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_run_app_quits_on_q() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Down),
            key_event(KeyCode::Char('q')),
            key_event(KeyCode::Down),
        ]);

        run_app(&mut terminal, &mut app, Theme::default_theme(), &mut reader).unwrap();

        assert!(app.should_quit);
        assert_eq!(app.selected, 1);
        // The event after quit is never consumed
        assert_eq!(reader.events.len(), 1);
    }

    #[test]
    fn test_run_app_quit_ignored_in_detail() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Enter),
            key_event(KeyCode::Char('q')),
            key_event(KeyCode::Down),
        ]);

        run_app(&mut terminal, &mut app, Theme::default_theme(), &mut reader).unwrap();

        assert!(!app.should_quit);
        assert_eq!(app.focus, Focus::Detail);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_run_app_records_initial_and_resized_viewport() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut app = test_app();
        let mut reader = MockEventReader::new(vec![Event::Resize(100, 30)]);

        run_app(&mut terminal, &mut app, Theme::default_theme(), &mut reader).unwrap();

        assert_eq!(app.viewport, ui::Viewport::new(100, 30));
    }

    #[test]
    fn test_save_after_session_write_failure_is_warning() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("missing").join("index.json");
        let index = Index::new(index_path.clone(), Default::default());

        assert!(save_after_session(&index).is_ok());
        assert!(!index_path.exists());
    }

    #[test]
    fn test_save_after_session_writes_index() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("index.json");
        let index = Index::new(index_path.clone(), Default::default());

        save_after_session(&index).unwrap();
        assert_eq!(fs::read_to_string(&index_path).unwrap(), "{}");
    }

    #[test]
    fn test_run_application_ignores_host_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            theme: "Nord".to_string(),
            index_path: temp_dir.path().join("from-config.json"),
            content_dir: temp_dir.path().join("from-config"),
        };
        let content = temp_dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        let index_path = temp_dir.path().join("index.json");

        run_application(args(index_path.clone(), content), config).unwrap();

        // Command-line paths win over the injected config
        assert!(index_path.exists());
        assert!(!temp_dir.path().join("from-config.json").exists());
    }

    #[test]
    fn test_resolve_theme_falls_back() {
        assert_eq!(resolve_theme("nord").name, "Nord");
        assert_eq!(resolve_theme("no-such-theme").name, "Reel");
    }

    #[test]
    fn test_run_application_list_builds_missing_index() {
        let temp_dir = TempDir::new().unwrap();
        let content = temp_dir.path().join("content");
        fs::create_dir_all(content.join("showA")).unwrap();
        let index_path = temp_dir.path().join("index.json");

        run_application(args(index_path.clone(), content), Config::default()).unwrap();

        assert!(index_path.exists());
    }

    #[test]
    fn test_run_application_content_root_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = temp_dir.path().join("content");
        fs::write(&content, "not a directory").unwrap();

        let result = run_application(
            args(temp_dir.path().join("index.json"), content),
            Config::default(),
        );
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to load index"));
    }

    #[test]
    fn test_run_application_malformed_index() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("index.json");
        fs::write(&index_path, "[1, 2, 3]").unwrap();

        let result = run_application(
            args(index_path, temp_dir.path().join("content")),
            Config::default(),
        );
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("malformed index file"));
    }
}
