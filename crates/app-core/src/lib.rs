//! Core data for CarePoint
//!
//! This crate holds the record types and the literal catalogs the screens
//! render: lab tests and packages, doctors and specializations, diagnostic
//! centers, and the demo account. Every record is immutable `'static` data;
//! ids are for display and routing only.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod catalog;
pub mod centers;
pub mod doctors;
pub mod money;

pub use account::{ProfileMenuItem, QuickAction, UserProfile, CURRENT_USER};
pub use catalog::{
    HealthPackage, LabTest, TestCategory, FEATURED_TESTS, HEALTH_PACKAGES, TEST_CATEGORIES,
};
pub use centers::{
    diagnostic_center, CenterSummary, CenterTest, DiagnosticCenter, DIAGNOSTIC_CENTER,
    DIAGNOSTIC_CENTERS,
};
pub use doctors::{
    doctor_profile, slugify, ConsultationKind, ConsultationOption, DoctorProfile, DoctorSummary,
    Review, Specialization, Specialty, TimeSlots, DOCTOR_PROFILE, DOCTOR_REVIEWS, SPECIALIZATIONS,
    TOP_DOCTORS,
};
pub use money::format_inr;
