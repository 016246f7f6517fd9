use serde::Serialize;

use crate::model::{Field, FormValues};

/// Fixed recipient name the email template addresses.
pub const RECIPIENT_NAME: &str = "Bibek";

/// The serialized form contents handed to the delivery channel.
///
/// Field names on the wire match the email template's placeholders
/// exactly. Beyond the nine form fields there are two derived entries:
/// `to_name` is the fixed recipient constant and `from_name` is the
/// first and last name joined by a single space. No trimming happens,
/// so an empty name leaves a leading, trailing, or doubled space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    pub to_name: String,
    pub from_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "preferredDate")]
    pub preferred_date: String,
    #[serde(rename = "preferredTime")]
    pub preferred_time: String,
    #[serde(rename = "consultationType")]
    pub consultation_type: String,
    pub message: String,
    #[serde(rename = "hearAboutUs")]
    pub hear_about_us: String,
}

impl FormPayload {
    /// Builds a payload from the current form values.
    ///
    /// Performs no validation: empty required fields pass through
    /// unchanged. Blocking those is the form's job, before submit.
    pub fn from_values(values: &FormValues) -> Self {
        let first_name = values.get(Field::FirstName).to_string();
        let last_name = values.get(Field::LastName).to_string();
        Self {
            to_name: RECIPIENT_NAME.to_string(),
            from_name: format!("{first_name} {last_name}"),
            first_name,
            last_name,
            email: values.get(Field::Email).to_string(),
            phone: values.get(Field::Phone).to_string(),
            preferred_date: values.get(Field::PreferredDate).to_string(),
            preferred_time: values.get(Field::PreferredTime).to_string(),
            consultation_type: values.get(Field::ConsultationType).to_string(),
            message: values.get(Field::Message).to_string(),
            hear_about_us: values.get(Field::HearAboutUs).to_string(),
        }
    }
}
