use crate::controller::SubmissionController;
use crate::service::AnalysisService;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::FormState;
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Everything the interactive form needs from `main`.
pub struct TuiOptions {
    pub service: Arc<dyn AnalysisService>,
    pub service_url: String,
    pub runtime: Handle,
    pub tick_rate: Duration,
    pub initial_link: Option<String>,
}

/// Run the form until the user quits.
///
/// A request still in flight when this returns is not cancelled; its result
/// is discarded when it arrives.
pub fn run(options: TuiOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let events = EventHandler::new(tick_rate);
    let controller = SubmissionController::new(options.service, options.runtime, events.sender());
    let form = options
        .initial_link
        .map(FormState::with_link)
        .unwrap_or_default();
    let mut app = App::new(form, controller).with_service_url(options.service_url);
    tracing::info!(target: "tui", "form opened");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        match events.next(tick_rate) {
            Ok(event) => {
                if handle_event(&mut app, event).is_break() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(target: "tui", "form closed");
    drop(events);
    drop(guard);
    Ok(())
}

/// Apply one event to the form. `Break` means the user asked to quit.
pub fn handle_event(app: &mut App, event: AppEvent) -> ControlFlow<()> {
    match event {
        AppEvent::Key(key) => match handle_key(app, key) {
            InputAction::Quit => return ControlFlow::Break(()),
            InputAction::Submitted => {
                tracing::debug!(target: "tui", "submission started from keyboard");
            }
            InputAction::None => {}
        },
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(_, _) => {}
        AppEvent::AnalysisResolved {
            request_id,
            outcome,
        } => app.on_analysis_resolved(request_id, outcome),
    }
    ControlFlow::Continue(())
}
