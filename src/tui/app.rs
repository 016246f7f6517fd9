use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::delivery::{DeliveryChannel, DeliveryError, FormPayload, Receipt};
use crate::model::{FormValues, SubmissionState};

use super::action::Action;
use super::error::AppError;
use super::screens::{BookingState, draw_booking};
use super::widgets::banner::{draw_error_banner, draw_submitting_banner, draw_success_banner};

/// Settled outcome of a delivery attempt, reported back from the
/// spawned task.
type Outcome = Result<Receipt, DeliveryError>;

/// Top-level application state.
///
/// Owns the booking screen, the submission state machine, and the
/// delivery channel. The channel is optional: without credentials the
/// app still runs, and every attempt settles immediately as failed.
pub struct App {
    booking: BookingState,
    submission: SubmissionState,
    channel: Option<Arc<dyn DeliveryChannel>>,
    handle: tokio::runtime::Handle,
    outcome_tx: tokio::sync::mpsc::UnboundedSender<Outcome>,
    outcome_rx: tokio::sync::mpsc::UnboundedReceiver<Outcome>,
    last_error: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with an empty form.
    pub fn new(channel: Option<Arc<dyn DeliveryChannel>>, handle: tokio::runtime::Handle) -> Self {
        let (outcome_tx, outcome_rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            booking: BookingState::new(),
            submission: SubmissionState::default(),
            channel,
            handle,
            outcome_tx,
            outcome_rx,
            last_error: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → drain settled outcomes → poll keys.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.poll_outcomes();
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handles a key event: global keys first, then the booking screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The submit trigger is disabled while an attempt is outstanding;
        // everything else (editing, quitting) stays live.
        if self.submission.in_flight() && key.code == KeyCode::Enter {
            return;
        }

        match self.booking.handle_key(key) {
            Action::None => {}
            Action::Submit(values) => self.submit(values),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Starts a delivery attempt for the given values.
    ///
    /// Exactly one outbound call per accepted invocation. Refused (and
    /// a no-op) when an attempt is already outstanding. Without a
    /// configured channel the attempt settles as failed on the spot,
    /// still passing through the in-flight state.
    pub fn submit(&mut self, values: FormValues) {
        if !self.submission.begin() {
            return;
        }

        let payload = FormPayload::from_values(&values);
        match self.channel.clone() {
            Some(channel) => {
                let tx = self.outcome_tx.clone();
                self.handle.spawn(async move {
                    let outcome = channel.send(&payload).await;
                    let _ = tx.send(outcome);
                });
            }
            None => self.finish(Err(DeliveryError::Unconfigured)),
        }
    }

    /// Applies any outcomes reported by the delivery task.
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish(outcome);
        }
    }

    /// Settles the outstanding attempt.
    ///
    /// Success resets every field; failure leaves the values untouched
    /// and keeps the error detail for the banner.
    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Ok(_receipt) => {
                self.submission.settle_ok();
                self.booking.reset();
                self.last_error = None;
            }
            Err(e) => {
                self.submission.settle_err();
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Renders the banner (when any), the form, and the footer.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        use ratatui::layout::{Constraint, Layout};
        use ratatui::style::{Color, Style};
        use ratatui::text::Line;
        use ratatui::widgets::{Block, Borders, Paragraph};

        let block = Block::default()
            .title(" konsult — Schedule Your Free Consultation ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(frame.area());
        frame.render_widget(block, frame.area());

        let [banner_area, form_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(27),
            Constraint::Length(1),
        ])
        .areas(inner);

        match self.submission {
            SubmissionState::Editing => {}
            SubmissionState::Submitting => draw_submitting_banner(frame, banner_area),
            SubmissionState::Succeeded => draw_success_banner(frame, banner_area),
            SubmissionState::Failed => {
                draw_error_banner(self.last_error.as_deref(), frame, banner_area)
            }
        }

        draw_booking(&self.booking, frame, form_area);

        let footer_text = if self.submission.in_flight() {
            "Scheduling...  Tab: next field  Esc: quit"
        } else {
            "Tab/Shift+Tab: next/prev  \u{25c2}\u{25b8}: choose option  Enter: schedule  Esc: quit"
        };
        let footer = Paragraph::new(Line::from(footer_text))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, footer_area);
    }

    /// Returns the submission state machine.
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Returns the booking screen state.
    pub fn booking(&self) -> &BookingState {
        &self.booking
    }

    /// Returns the diagnostic detail of the last failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crossterm::event::KeyEventState;

    use crate::model::{Field, SubmissionStatus};

    use super::*;

    /// Delivery double that settles with a preset outcome.
    struct StaticChannel {
        succeed: bool,
    }

    #[async_trait]
    impl DeliveryChannel for StaticChannel {
        async fn send(&self, _payload: &FormPayload) -> Result<Receipt, DeliveryError> {
            if self.succeed {
                Ok(Receipt {
                    status: "OK".into(),
                })
            } else {
                Err(DeliveryError::Rejected {
                    status: 400,
                    body: "bad template".into(),
                })
            }
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn filled_values() -> FormValues {
        let mut values = FormValues::new();
        values.set(Field::FirstName, "Anu");
        values.set(Field::LastName, "Gurung");
        values.set(Field::Email, "anu@example.com");
        values.set(Field::Phone, "+977-9800000000");
        values.set(Field::PreferredDate, "2025-01-10");
        values.set(Field::PreferredTime, "10:00 AM");
        values.set(Field::ConsultationType, "Portfolio Review");
        values
    }

    async fn settle(app: &mut App) {
        for _ in 0..200 {
            app.poll_outcomes();
            if !app.submission().in_flight() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never settled");
    }

    #[tokio::test]
    async fn successful_delivery_resets_form_and_reports_success() {
        let channel = Arc::new(StaticChannel { succeed: true });
        let mut app = App::new(Some(channel), tokio::runtime::Handle::current());

        app.submit(filled_values());
        assert!(app.submission().in_flight());

        settle(&mut app).await;
        assert_eq!(app.submission().status(), SubmissionStatus::Success);
        assert!(app.booking().form().values().is_empty());
        assert_eq!(app.last_error(), None);
    }

    #[tokio::test]
    async fn failed_delivery_keeps_values_and_reports_error() {
        let channel = Arc::new(StaticChannel { succeed: false });
        let mut app = App::new(Some(channel), tokio::runtime::Handle::current());

        app.submit(filled_values());
        settle(&mut app).await;

        assert_eq!(app.submission().status(), SubmissionStatus::Error);
        assert_eq!(app.booking().form().values(), &FormValues::new());
        assert!(
            app.last_error().unwrap().contains("400"),
            "detail should carry the rejection status"
        );
    }

    #[tokio::test]
    async fn failed_delivery_leaves_typed_values_untouched() {
        let channel = Arc::new(StaticChannel { succeed: false });
        let mut app = App::new(Some(channel), tokio::runtime::Handle::current());

        for ch in "Anu".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        let before = app.booking().form().values().clone();

        app.submit(filled_values());
        settle(&mut app).await;

        assert_eq!(app.booking().form().values(), &before);
    }

    #[tokio::test]
    async fn unconfigured_channel_settles_failed_without_suspending() {
        let mut app = App::new(None, tokio::runtime::Handle::current());

        app.submit(filled_values());

        // In-flight was entered and left within the call itself.
        assert!(!app.submission().in_flight());
        assert_eq!(app.submission().status(), SubmissionStatus::Error);
        assert_eq!(
            app.last_error(),
            Some("delivery channel is not configured")
        );
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_refused() {
        // A channel that never resolves keeps the first attempt
        // outstanding for the duration of the test.
        struct PendingChannel;

        #[async_trait]
        impl DeliveryChannel for PendingChannel {
            async fn send(&self, _payload: &FormPayload) -> Result<Receipt, DeliveryError> {
                std::future::pending().await
            }
        }

        let mut app = App::new(
            Some(Arc::new(PendingChannel)),
            tokio::runtime::Handle::current(),
        );
        app.submit(filled_values());
        assert!(app.submission().in_flight());

        app.submit(filled_values());
        app.poll_outcomes();
        assert!(app.submission().in_flight());
        assert_eq!(app.submission(), SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn enter_is_ignored_while_in_flight() {
        struct PendingChannel;

        #[async_trait]
        impl DeliveryChannel for PendingChannel {
            async fn send(&self, _payload: &FormPayload) -> Result<Receipt, DeliveryError> {
                std::future::pending().await
            }
        }

        let mut app = App::new(
            Some(Arc::new(PendingChannel)),
            tokio::runtime::Handle::current(),
        );
        app.submit(filled_values());

        app.handle_key(press(KeyCode::Enter));
        assert!(app.submission().in_flight());
    }

    #[tokio::test]
    async fn editing_after_success_keeps_the_banner() {
        let channel = Arc::new(StaticChannel { succeed: true });
        let mut app = App::new(Some(channel), tokio::runtime::Handle::current());

        app.submit(filled_values());
        settle(&mut app).await;
        assert_eq!(app.submission().status(), SubmissionStatus::Success);

        app.handle_key(press(KeyCode::Char('A')));
        assert_eq!(app.submission().status(), SubmissionStatus::Success);
        assert_eq!(app.booking().form().value(Field::FirstName), "A");
    }

    #[tokio::test]
    async fn failed_attempt_can_be_overwritten_by_success() {
        let mut app = App::new(None, tokio::runtime::Handle::current());
        app.submit(filled_values());
        assert_eq!(app.submission().status(), SubmissionStatus::Error);

        app.channel = Some(Arc::new(StaticChannel { succeed: true }));
        app.submit(filled_values());
        settle(&mut app).await;
        assert_eq!(app.submission().status(), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn ctrl_c_quits() {
        let mut app = App::new(None, tokio::runtime::Handle::current());
        app.handle_key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn esc_quits() {
        let mut app = App::new(None, tokio::runtime::Handle::current());
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let mut app = App::new(None, tokio::runtime::Handle::current());
        app.handle_key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!app.should_quit());
    }
}
