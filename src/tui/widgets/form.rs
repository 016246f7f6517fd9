//! The booking form widget: field values, focus, and inline errors.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FieldKind, FormValues};

/// Nine-field booking form with focus management.
///
/// Owns the [`FormValues`] store directly, so every edit flows through
/// the store's `set`/`reset_all` contract. Enumerated fields ignore
/// typed characters; their value only changes by cycling through the
/// fixed option list, which keeps out-of-list values unreachable from
/// the keyboard.
#[derive(Debug, Clone)]
pub struct BookingForm {
    values: FormValues,
    errors: Vec<Option<String>>,
    focus: usize,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    /// Creates an empty form focused on the first field.
    pub fn new() -> Self {
        Self {
            values: FormValues::new(),
            errors: vec![None; Field::all().len()],
            focus: 0,
        }
    }

    /// Returns the currently focused field.
    pub fn focused(&self) -> Field {
        Field::all()[self.focus]
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::all().len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = Field::all().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Appends a character to the focused field.
    ///
    /// Ignored for enumerated fields.
    pub fn insert_char(&mut self, ch: char) {
        let field = self.focused();
        if matches!(field.kind(), FieldKind::Text) {
            self.values.field_mut(field).push(ch);
        }
    }

    /// Deletes the last character of the focused field.
    ///
    /// For enumerated fields this clears the whole selection, which is
    /// how an optional select returns to "no choice".
    pub fn delete_char(&mut self) {
        let field = self.focused();
        match field.kind() {
            FieldKind::Text => {
                self.values.field_mut(field).pop();
            }
            FieldKind::Select(_) => self.values.set(field, ""),
        }
    }

    /// Cycles the focused enumerated field through its options.
    ///
    /// An empty value moves to the first (or last) option. No-op for
    /// text fields.
    pub fn cycle_option(&mut self, forward: bool) {
        let field = self.focused();
        let FieldKind::Select(options) = field.kind() else {
            return;
        };
        let current = self.values.get(field);
        let next = match options.iter().position(|&o| o == current) {
            None => {
                if forward {
                    options[0]
                } else {
                    options[options.len() - 1]
                }
            }
            Some(pos) if forward => options[(pos + 1) % options.len()],
            Some(pos) => options[(pos + options.len() - 1) % options.len()],
        };
        self.values.set(field, next);
    }

    /// Returns the value of `field`.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Replaces the value of `field`.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Returns the underlying value store.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Sets a validation error on a field.
    pub fn set_error(&mut self, field: Field, error: String) {
        self.errors[index_of(field)] = Some(error);
    }

    /// Returns the error on `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors[index_of(field)].as_deref()
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for error in &mut self.errors {
            *error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Resets all values, errors, and focus.
    pub fn reset(&mut self) {
        self.values.reset_all();
        self.clear_errors();
        self.focus = 0;
    }
}

fn index_of(field: Field) -> usize {
    Field::all()
        .iter()
        .position(|&f| f == field)
        .unwrap_or_default()
}

/// Renders the form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_booking_form(form: &BookingForm, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = Field::all()
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, &field) in Field::all().iter().enumerate() {
        let is_focused = field == form.focused();

        let border_color = if form.error(field).is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let value = form.value(field);
        let mut spans = match field.kind() {
            FieldKind::Select(_) if value.is_empty() => vec![Span::styled(
                "◂ select an option ▸",
                Style::default().fg(Color::DarkGray),
            )],
            FieldKind::Select(_) => vec![
                Span::raw(value),
                Span::styled("  ◂ ▸", Style::default().fg(Color::DarkGray)),
            ],
            FieldKind::Text => vec![Span::raw(value)],
        };
        if is_focused && matches!(field.kind(), FieldKind::Text) {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Draw error below the field if there's space
        if let Some(err) = form.error(field) {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
