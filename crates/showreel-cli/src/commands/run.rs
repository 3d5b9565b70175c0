use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use showreel_core::contact::{submitter_from_config, ContactSubmission, ContactSubmitter};
use showreel_core::AppConfig;
use showreel_tui::{
    app::{App, Focus, Mode},
    event::{AppEvent, EventHandler, SubmissionResult},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{
        CarouselWidget, ContactFormWidget, GuestCardWidget, HeaderWidget, PopupWidget, StatusBarWidget,
        TestimonialCardWidget,
    },
    Theme,
};

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);
    let submitter = submitter_from_config(&config.contact)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Showreel")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = main_loop(&mut terminal, config, &keymap, submitter).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    outcome
}

async fn main_loop(
    terminal: &mut Terminal<Backend>,
    config: Arc<AppConfig>,
    keymap: &Keymap,
    submitter: Arc<dyn ContactSubmitter>,
) -> Result<()> {
    let theme = Theme::from_overrides(&config.ui.theme);
    let mut app = App::new(config.clone(), theme);

    // First measurement initializes both carousels
    let size = terminal.size()?;
    app.apply_resize(size.width, size.height, Instant::now());
    info!(width = size.width, height = size.height, "Terminal UI started");

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Create channel for background submission results
    let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<SubmissionResult>();

    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        // Process any finished submissions (non-blocking)
        while let Ok(result) = submit_rx.try_recv() {
            app.finish_submission(result);
        }

        app.update(Instant::now());

        terminal.draw(|frame| draw(frame, &app, keymap))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, keymap);
                    if let Some(submission) = app.handle_action(action, Instant::now()) {
                        spawn_submission(submitter.clone(), submission, submit_tx.clone());
                    }
                }
                AppEvent::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        app.push_pointer(mouse.column, mouse.row);
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        app.push_pointer(mouse.column, mouse.row);
                        if matches!(app.mode, Mode::Normal | Mode::Editing) {
                            app.handle_click(mouse.column, mouse.row, Instant::now());
                        }
                    }
                    _ => {}
                },
                AppEvent::Resize(width, height) => app.push_resize(width, height),
                AppEvent::FocusLost => app.pointer_left(),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Send the form on the runtime and report back through the channel
fn spawn_submission(
    submitter: Arc<dyn ContactSubmitter>,
    submission: ContactSubmission,
    tx: mpsc::UnboundedSender<SubmissionResult>,
) {
    tokio::spawn(async move {
        let result = submitter.submit(&submission).await;
        if tx.send(result).is_err() {
            debug!("Submission finished after the UI closed");
        }
    });
}

fn draw(frame: &mut Frame, app: &App, keymap: &Keymap) {
    // A pending resize has not been measured yet; skip this frame
    if frame.area() != app.screen.area {
        return;
    }

    let theme = &app.theme;
    HeaderWidget::render(frame, app.screen.header, theme);

    CarouselWidget::render(
        frame,
        &app.guests_regions,
        &app.guests,
        "Guests",
        app.focus == Focus::Guests,
        app.cell_width,
        theme,
        |frame, area, slide| GuestCardWidget::render(frame, area, slide, theme),
    );
    CarouselWidget::render(
        frame,
        &app.testimonials_regions,
        &app.testimonials,
        "What our clients say",
        app.focus == Focus::Testimonials,
        app.cell_width,
        theme,
        |frame, area, testimonial| TestimonialCardWidget::render(frame, area, testimonial, theme),
    );
    ContactFormWidget::render(frame, app.screen.contact, app, keymap);
    StatusBarWidget::render(frame, app.screen.status, app, keymap);

    // Render overlays on top
    match &app.mode {
        Mode::Help => PopupWidget::render_help(frame, keymap, theme),
        Mode::Alert(notice) => PopupWidget::render_notice(frame, *notice, theme),
        Mode::Normal | Mode::Editing => {}
    }
}
