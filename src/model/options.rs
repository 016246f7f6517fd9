//! Fixed option sets for the enumerated booking fields.
//!
//! These lists are configuration, not behavior, but they must match the
//! advertised offerings exactly: they bound which values the delivery
//! payload can ever carry through the normal UI path.

use std::fmt;

/// Consultation offerings a client can book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationType {
    InvestmentPlanning,
    PortfolioReview,
    CourseSelection,
    GeneralConsultation,
}

static ALL_CONSULTATION_TYPES: &[ConsultationType] = &[
    ConsultationType::InvestmentPlanning,
    ConsultationType::PortfolioReview,
    ConsultationType::CourseSelection,
    ConsultationType::GeneralConsultation,
];

static CONSULTATION_TYPE_LABELS: &[&str] = &[
    "Investment Planning",
    "Portfolio Review",
    "Course Selection",
    "General Consultation",
];

impl ConsultationType {
    /// Returns all consultation types.
    pub fn all() -> &'static [ConsultationType] {
        ALL_CONSULTATION_TYPES
    }

    /// Returns the display labels, in the same order as [`all`](Self::all).
    pub fn labels() -> &'static [&'static str] {
        CONSULTATION_TYPE_LABELS
    }

    /// Display label for this consultation type.
    pub fn label(self) -> &'static str {
        match self {
            ConsultationType::InvestmentPlanning => "Investment Planning",
            ConsultationType::PortfolioReview => "Portfolio Review",
            ConsultationType::CourseSelection => "Course Selection",
            ConsultationType::GeneralConsultation => "General Consultation",
        }
    }
}

#[mutants::skip]
impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a client heard about the practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferralSource {
    GoogleSearch,
    SocialMedia,
    FriendFamilyReferral,
    Advertisement,
    Website,
    Other,
}

static ALL_REFERRAL_SOURCES: &[ReferralSource] = &[
    ReferralSource::GoogleSearch,
    ReferralSource::SocialMedia,
    ReferralSource::FriendFamilyReferral,
    ReferralSource::Advertisement,
    ReferralSource::Website,
    ReferralSource::Other,
];

static REFERRAL_SOURCE_LABELS: &[&str] = &[
    "Google Search",
    "Social Media",
    "Friend/Family Referral",
    "Advertisement",
    "Website",
    "Other",
];

impl ReferralSource {
    /// Returns all referral sources.
    pub fn all() -> &'static [ReferralSource] {
        ALL_REFERRAL_SOURCES
    }

    /// Returns the display labels, in the same order as [`all`](Self::all).
    pub fn labels() -> &'static [&'static str] {
        REFERRAL_SOURCE_LABELS
    }

    /// Display label for this referral source.
    pub fn label(self) -> &'static str {
        match self {
            ReferralSource::GoogleSearch => "Google Search",
            ReferralSource::SocialMedia => "Social Media",
            ReferralSource::FriendFamilyReferral => "Friend/Family Referral",
            ReferralSource::Advertisement => "Advertisement",
            ReferralSource::Website => "Website",
            ReferralSource::Other => "Other",
        }
    }
}

#[mutants::skip]
impl fmt::Display for ReferralSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bookable half-hour appointment slots, 9:00 AM through 5:30 PM.
pub static TIME_SLOTS: &[&str] = &[
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM",
    "5:00 PM", "5:30 PM",
];
