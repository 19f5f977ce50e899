//! Museo - a terminal-based museum collection browser.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use museo::api::{ApiClient, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE};
use museo::app::{App, Screen};
use museo::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "museo")]
#[command(about = "A terminal-based museum collection browser", long_about = None)]
struct Args {
    /// Initial search query to pre-fill the search form
    query: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Base URL of the collection API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Base URL of the IIIF image service
    #[arg(long, default_value = DEFAULT_IMAGE_BASE)]
    image_base: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Museo");
    }

    let client = ApiClient::with_base_urls(&args.api_base, &args.image_base)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(client, args.query);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Museo exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Classification picker - handle separately
                if app.screen == Screen::Search && app.form.picker.is_some() {
                    match key.code {
                        KeyCode::Enter => {
                            app.form.picker_choose();
                            if let Some(classification) = app.form.classification {
                                app.status = format!("Classification: {}", classification.label());
                            }
                        },
                        KeyCode::Esc => app.form.picker_cancel(),
                        KeyCode::Up | KeyCode::Char('k') => {
                            if let Some(picker) = app.form.picker.as_mut() {
                                picker.cursor_up();
                            }
                        },
                        KeyCode::Down | KeyCode::Char('j') => {
                            if let Some(picker) = app.form.picker.as_mut() {
                                picker.cursor_down();
                            }
                        },
                        _ => {},
                    }
                    app.tick();
                    continue;
                }

                // Text editing mode - handle separately
                if app.screen == Screen::Search && app.form.editing {
                    match key.code {
                        KeyCode::Enter | KeyCode::Esc => app.form.stop_editing(),
                        KeyCode::Backspace => app.form.backspace(),
                        KeyCode::Char(c) => app.form.input(c),
                        _ => {},
                    }
                    app.tick();
                    continue;
                }

                match app.screen {
                    Screen::Search => match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Navigation
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.form.cursor_up();
                        },
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j'))
                        | (KeyModifiers::NONE, KeyCode::Tab) => {
                            app.form.cursor_down();
                        },

                        // Toggle the focused filter group
                        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                            app.form.toggle_current();
                        },

                        // Activate the focused row
                        (KeyModifiers::NONE, KeyCode::Enter) => {
                            app.activate_form_row();
                        },

                        // Submit from anywhere
                        (KeyModifiers::NONE, KeyCode::Char('s')) => {
                            app.submit_search();
                        },

                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                            app.cycle_theme();
                        },

                        _ => {},
                    },

                    Screen::Results => match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Navigation
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.results.cursor_up();
                        },
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.results.cursor_down();
                        },

                        // Vim navigation
                        (KeyModifiers::NONE, KeyCode::Char('g')) => {
                            if pending_g {
                                app.results.goto_first();
                                pending_g = false;
                            } else {
                                pending_g = true;
                            }
                        },
                        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                            app.results.goto_last();
                        },
                        (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                            for _ in 0..15 {
                                app.results.cursor_down();
                            }
                        },
                        (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
                            for _ in 0..15 {
                                app.results.cursor_up();
                            }
                        },

                        // Open details
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Char('l'))
                        | (KeyModifiers::NONE, KeyCode::Right) => {
                            app.open_detail();
                        },

                        // Back to the search form
                        (KeyModifiers::NONE, KeyCode::Char('h'))
                        | (KeyModifiers::NONE, KeyCode::Left)
                        | (KeyModifiers::NONE, KeyCode::Esc) => {
                            app.back();
                        },

                        // Clipboard
                        (KeyModifiers::NONE, KeyCode::Char('y')) => {
                            app.copy_current();
                        },

                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                            app.cycle_theme();
                        },

                        _ => {
                            pending_g = false;
                        },
                    },

                    Screen::Detail => match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Scrolling
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            if let Some(detail) = app.detail.as_mut() {
                                detail.scroll_up();
                            }
                        },
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            if let Some(detail) = app.detail.as_mut() {
                                detail.scroll_down();
                            }
                        },
                        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                            if let Some(detail) = app.detail.as_mut() {
                                for _ in 0..5 {
                                    detail.scroll_up();
                                }
                            }
                        },
                        (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                            if let Some(detail) = app.detail.as_mut() {
                                for _ in 0..5 {
                                    detail.scroll_down();
                                }
                            }
                        },

                        // Back to the results list
                        (KeyModifiers::NONE, KeyCode::Char('h'))
                        | (KeyModifiers::NONE, KeyCode::Left)
                        | (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Backspace) => {
                            app.back();
                        },

                        // Clipboard
                        (KeyModifiers::NONE, KeyCode::Char('y')) => {
                            app.copy_current();
                        },

                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                            app.cycle_theme();
                        },

                        _ => {},
                    },
                }
            }
        }

        app.tick();
    }
}
