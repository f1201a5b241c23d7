use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use folio_core::{content::PROFILE, AppConfig, ContactSubmission, SiteClient};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, ContactResult, DownloadResult, EventHandler},
    input::{confirm_action, handle_key_event, handle_mouse_event, Action},
    notification::Notification,
    widgets::PageWidget,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let client = Arc::new(SiteClient::from_config(&config)?);
    let download_dir = config.download_dir();

    // Restored on drop, including when the loop bails out with an error
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (columns, rows) = size()?;
    let mut app = App::new(config.clone(), columns, rows);

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );

    // Channels for spawned request results
    let (contact_tx, mut contact_rx) = mpsc::unbounded_channel::<ContactResult>();
    let (download_tx, mut download_rx) = mpsc::unbounded_channel::<DownloadResult>();

    let mut last_frame = Instant::now();

    // Main loop
    loop {
        // Process any completed requests (non-blocking)
        while let Ok(result) = contact_rx.try_recv() {
            if let Some(notification) = app.contact.complete(result.generation, result.outcome) {
                app.notify(notification);
            }
        }
        while let Ok(result) = download_rx.try_recv() {
            handle_download_result(&mut app, result);
        }

        let now = Instant::now();
        app.on_frame(now - last_frame);
        last_frame = now;

        terminal.draw(|frame| PageWidget::render(frame, &mut app))?;

        // Faster polling while anything is moving
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key, &app),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse),
                AppEvent::Resize(width, height) => {
                    app.on_resize(width, height);
                    Action::None
                }
                AppEvent::Tick => Action::None,
            };
            handle_action(&mut app, action, &client, &download_dir, &contact_tx, &download_tx);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the page
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on a failure still has to undo raw mode
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, SetTitle(PROFILE.name))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!("Failed to restore the terminal: {}", e);
        }
    }
}

fn handle_action(
    app: &mut App,
    action: Action,
    client: &Arc<SiteClient>,
    download_dir: &Path,
    contact_tx: &mpsc::UnboundedSender<ContactResult>,
    download_tx: &mpsc::UnboundedSender<DownloadResult>,
) {
    let max = app.max_scroll();
    let page_rows = app.viewport.1;
    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll.scroll_down(max),
        Action::ScrollUp => app.scroll.scroll_up(max),
        Action::ScrollHalfPageDown => app.scroll.scroll_half_page_down(page_rows, max),
        Action::ScrollHalfPageUp => app.scroll.scroll_half_page_up(page_rows, max),
        Action::ScrollPageDown => app.scroll.scroll_full_page_down(page_rows, max),
        Action::ScrollPageUp => app.scroll.scroll_full_page_up(page_rows, max),
        Action::JumpToTop => app.scroll.scroll_to(0, max),
        Action::JumpToBottom => app.scroll.scroll_to(max, max),
        Action::JumpTo(section) => app.scroll_to_section(section),
        Action::NextSection => app.step_section(true),
        Action::PrevSection => app.step_section(false),
        Action::Wheel(delta) => app.scroll.scroll_by(delta, max),
        Action::Pointer { column, row } => app.on_pointer(column, row),

        Action::DownloadResume => {
            if app.downloading {
                return;
            }
            app.downloading = true;
            spawn_download(client.clone(), download_dir.to_path_buf(), download_tx.clone());
        }
        Action::EmailMe => {
            if let Err(e) = open::that(format!("mailto:{}", PROFILE.email)) {
                warn!("Failed to open mail client: {}", e);
                app.notify(Notification::error(
                    "No Mail Client",
                    format!("Write to {} instead.", PROFILE.email),
                ));
            }
        }
        Action::EditContact => app.enter_contact_mode(),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::ExitMode => app.mode = Mode::Browse,

        Action::NextField => app.contact.focus_next(),
        Action::PrevField => app.contact.focus_prev(),
        Action::InputChar(c) => app.contact.insert_char(c),
        Action::Newline => app.contact.insert_newline(),
        Action::Backspace => app.contact.backspace(),
        Action::Confirm => {
            let next = confirm_action(app.contact.focus());
            handle_action(app, next, client, download_dir, contact_tx, download_tx);
        }
        Action::Submit => match app.contact.begin_submit() {
            Some(ticket) => spawn_contact(
                client.clone(),
                ticket.generation,
                ticket.submission,
                contact_tx.clone(),
            ),
            None => debug!(missing = ?app.contact.missing_fields(), "submit refused"),
        },
        Action::ClearForm => app.contact.reset(),
        Action::None => {}
    }
}

fn spawn_contact(
    client: Arc<SiteClient>,
    generation: u64,
    submission: ContactSubmission,
    tx: mpsc::UnboundedSender<ContactResult>,
) {
    tokio::spawn(async move {
        let outcome = client
            .submit_contact(&submission)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(ContactResult { generation, outcome });
    });
}

fn spawn_download(client: Arc<SiteClient>, dir: PathBuf, tx: mpsc::UnboundedSender<DownloadResult>) {
    tokio::spawn(async move {
        let result = match client.download_resume(&dir).await {
            Ok(path) => DownloadResult::Success { path },
            Err(e) => DownloadResult::Failure {
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });
}

fn handle_download_result(app: &mut App, result: DownloadResult) {
    app.downloading = false;
    match result {
        DownloadResult::Success { path } => {
            debug!("Resume saved to {}", path.display());
            app.notify(Notification::success(
                "Resume Downloaded",
                "Thank you for your interest!",
            ));
        }
        DownloadResult::Failure { error } => {
            warn!("Resume download failed: {}", error);
            app.notify(Notification::error("Download Failed", "Please try again later."));
        }
    }
}
