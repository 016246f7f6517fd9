//! Booking form fields and the value store backing them.

use super::options::{ConsultationType, ReferralSource, TIME_SLOTS};

/// How a field collects its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form typed text.
    Text,
    /// One value out of a fixed option list, chosen by cycling.
    Select(&'static [&'static str]),
}

/// The nine booking form fields, in display order.
///
/// Using an enum as the key type means a value outside the fixed set
/// cannot be addressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    PreferredDate,
    PreferredTime,
    ConsultationType,
    Message,
    HearAboutUs,
}

static ALL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::PreferredDate,
    Field::PreferredTime,
    Field::ConsultationType,
    Field::Message,
    Field::HearAboutUs,
];

impl Field {
    /// Returns all fields in display order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Display label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::PreferredDate => "Preferred Date (YYYY-MM-DD)",
            Field::PreferredTime => "Preferred Time",
            Field::ConsultationType => "Consultation Type",
            Field::Message => "Additional Message",
            Field::HearAboutUs => "How did you hear about us?",
        }
    }

    /// Whether the field must be non-empty on submit.
    pub fn required(self) -> bool {
        !matches!(self, Field::Message | Field::HearAboutUs)
    }

    /// How the field collects its value.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::PreferredTime => FieldKind::Select(TIME_SLOTS),
            Field::ConsultationType => FieldKind::Select(ConsultationType::labels()),
            Field::HearAboutUs => FieldKind::Select(ReferralSource::labels()),
            _ => FieldKind::Text,
        }
    }
}

/// Current values of all nine form fields.
///
/// Every key exists from construction onward; values are plain strings
/// and may be empty, never absent. This layer performs no validation:
/// [`set`](Self::set) is total over (state, field, value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    preferred_date: String,
    preferred_time: String,
    consultation_type: String,
    message: String,
    hear_about_us: String,
}

impl FormValues {
    /// Creates a store with all nine fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::PreferredDate => &self.preferred_date,
            Field::PreferredTime => &self.preferred_time,
            Field::ConsultationType => &self.consultation_type,
            Field::Message => &self.message,
            Field::HearAboutUs => &self.hear_about_us,
        }
    }

    /// Replaces the value of `field`, leaving every other field untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Restores every field to the empty string.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|&f| self.get(f).is_empty())
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::PreferredDate => &mut self.preferred_date,
            Field::PreferredTime => &mut self.preferred_time,
            Field::ConsultationType => &mut self.consultation_type,
            Field::Message => &mut self.message,
            Field::HearAboutUs => &mut self.hear_about_us,
        }
    }
}
