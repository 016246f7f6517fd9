//! Booking screen — the consultation request entry form.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::model::{Field, validate_date_not_past, validate_email, validate_required};
use crate::tui::action::Action;
use crate::tui::widgets::form::{BookingForm, draw_booking_form};

/// State for the booking screen.
#[derive(Debug, Clone, Default)]
pub struct BookingState {
    form: BookingForm,
}

impl BookingState {
    /// Creates a fresh booking form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Left => {
                self.form.cycle_option(false);
                Action::None
            }
            KeyCode::Right => {
                self.form.cycle_option(true);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Validates the form against today's date and submits.
    fn submit(&mut self) -> Action {
        self.submit_as_of(Local::now().date_naive())
    }

    /// Validates all fields at once and, if clean, hands the values off
    /// for delivery.
    ///
    /// These checks stand in for the native input constraints of the
    /// equivalent web form (`required`, `type=email`, `type=date` with
    /// a minimum of today). Nothing past this point validates again.
    pub fn submit_as_of(&mut self, today: NaiveDate) -> Action {
        self.form.clear_errors();

        for &field in Field::all() {
            if field.required()
                && let Err(e) = validate_required(field.label(), self.form.value(field))
            {
                self.form.set_error(field, e.to_string());
            }
        }

        let email = self.form.value(Field::Email);
        if !email.is_empty()
            && let Err(e) = validate_email(email)
        {
            self.form.set_error(Field::Email, e.to_string());
        }

        let date = self.form.value(Field::PreferredDate);
        if !date.is_empty()
            && let Err(e) = validate_date_not_past(date, today)
        {
            self.form.set_error(Field::PreferredDate, e.to_string());
        }

        if self.form.has_errors() {
            return Action::None;
        }

        Action::Submit(self.form.values().clone())
    }
}

/// Renders the booking screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_booking(state: &BookingState, frame: &mut Frame, area: Rect) {
    draw_booking_form(state.form(), frame, area);
}
