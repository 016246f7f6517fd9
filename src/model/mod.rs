mod fields;
mod options;
mod submission;
mod validation;

pub use fields::{Field, FieldKind, FormValues};
pub use options::{ConsultationType, ReferralSource, TIME_SLOTS};
pub use submission::{SubmissionState, SubmissionStatus};
pub use validation::{
    ValidationError, validate_date_not_past, validate_email, validate_required,
};
