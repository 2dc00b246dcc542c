mod app;
mod report;
mod tui;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread::JoinHandle;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};
use ssda_core::{CancellationToken, ScanConfig, ScanError, ScanResult, Scanner, validate_root};
use tracing_subscriber::EnvFilter;

use app::{Action, AppMode, AppState};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{
    AppLayout, CompositionView, Footer, Header, HelpView, ProgressView, ResultsLayout, Theme,
    TopExtensionsView, TopFoldersView,
};

/// SSDA - storage composition analyzer
#[derive(Parser, Debug)]
#[command(name = "ssda")]
#[command(about = "Shows how much space photos, videos, documents, archives and other files take")]
#[command(version)]
struct Args {
    /// Path to analyze (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 0)]
    threads: usize,

    /// Follow symbolic links
    #[arg(short = 'L', long)]
    follow_symlinks: bool,

    /// Rows in the largest folders / extensions lists
    #[arg(short = 'n', long, default_value_t = 5)]
    top: usize,

    /// Print a plain-text report instead of the interactive view
    #[arg(long)]
    no_tui: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            num_threads: self.threads,
            follow_symlinks: self.follow_symlinks,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args)?;

    // Resolve path
    let path = args
        .path
        .clone()
        .canonicalize()
        .unwrap_or(args.path.clone());

    if let Err(e) = validate_root(&path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if args.no_tui {
        return run_report(path, &args);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, path, &args);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

/// Install the `tracing` subscriber.
///
/// The interactive view owns the terminal, so it only logs when a file is
/// given. Plain-text runs log to stderr, filtered by `RUST_LOG`.
fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match &args.log {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if args.no_tui => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_report(path: PathBuf, args: &Args) -> Result<()> {
    let scanner = Scanner::new(args.scan_config());
    let (rx, handle) = scanner.scan(path);

    // Nothing to display; drain so the stream never fills up
    for _ in rx {}

    let result = join_scan(handle)?;
    print!("{}", report::render_report(&result, args.top));
    Ok(())
}

fn join_scan(handle: JoinHandle<ssda_core::Result<ScanResult>>) -> Result<ScanResult> {
    handle
        .join()
        .map_err(|_| eyre!("scan thread panicked"))?
        .map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    path: PathBuf,
    args: &Args,
) -> Result<()> {
    let theme = Theme::default();
    let mut state = AppState::new(path.clone(), args.top);
    let event_handler = EventHandler::new(50); // 50ms tick rate

    tracing::debug!(root = %path.display(), "starting interactive scan");
    let cancel_token = CancellationToken::new();
    let scanner = Scanner::new(args.scan_config()).with_cancellation(cancel_token.clone());
    let (progress_rx, handle) = scanner.scan(path);
    let mut scan_handle = Some(handle);

    loop {
        // Drain the progress stream; the scan thread result is collected
        // once the terminal message arrives
        if scan_handle.is_some() {
            while let Ok(msg) = progress_rx.try_recv() {
                if state.apply(msg) {
                    if let Some(handle) = scan_handle.take() {
                        match join_scan(handle) {
                            Ok(result) => state.set_result(result),
                            Err(e) => match e.downcast_ref::<ScanError>() {
                                Some(ScanError::Cancelled) => {}
                                _ => state.set_error(e.to_string()),
                            },
                        }
                    }
                    break;
                }
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            Header::new(&state, &theme).render(layout.header, frame.buffer_mut());
            ui::render_progress_bar(&state, &theme, layout.progress_bar, frame.buffer_mut());

            match (state.mode, &state.stats) {
                (AppMode::Done, Some(stats)) => {
                    let results = ResultsLayout::new(layout.body);
                    CompositionView::new(stats, &theme)
                        .render(results.composition, frame.buffer_mut());
                    TopFoldersView::new(stats, state.top_n, &theme)
                        .render(results.folders, frame.buffer_mut());
                    TopExtensionsView::new(stats, state.top_n, &theme)
                        .render(results.extensions, frame.buffer_mut());
                }
                (AppMode::Failed, _) => {
                    let message = state.error_message.as_deref().unwrap_or("Scan failed");
                    frame.buffer_mut().set_string(
                        layout.body.x + 1,
                        layout.body.y + 1,
                        format!("Error: {}", message),
                        Style::default().fg(theme.red),
                    );
                }
                _ => {
                    ProgressView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
            }

            if state.show_help {
                HelpView::new(&theme).render(area, frame.buffer_mut());
            }

            Footer::new(state.show_help, &theme).render(layout.footer, frame.buffer_mut());
        })?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = handle_key(key, state.show_help);
                handle_action(&mut state, action);
            }
            AppEvent::Resize => {
                // Terminal will redraw on next loop
            }
            AppEvent::Tick => {
                state.tick_spinner();
            }
        }

        if state.should_quit {
            cancel_token.cancel();
            break;
        }
    }

    Ok(())
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::ShowHelp => state.show_help(),
        Action::HideHelp => state.hide_help(),
        Action::Quit => state.quit(),
        Action::Tick => {}
    }
}
