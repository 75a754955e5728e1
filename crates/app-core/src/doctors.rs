//! Doctors, specializations and consultations
//!
//! The detail record is a single fixed mock: looking a doctor up by id always
//! yields [`DOCTOR_PROFILE`], whatever id the route carried.

use serde::Serialize;

use crate::money::format_inr;

// =============================================================================
// Specializations
// =============================================================================

/// Medical specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specialty {
    /// General physician
    GeneralPhysician,
    /// Dermatologist
    Dermatologist,
    /// Gynecologist
    Gynecologist,
    /// Eye specialist
    EyeSpecialist,
    /// Cardiologist
    Cardiologist,
    /// Neurologist
    Neurologist,
    /// Orthopedist
    Orthopedist,
    /// Gastroenterologist
    Gastroenterologist,
}

impl Specialty {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Specialty::GeneralPhysician => "General Physician",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Gynecologist => "Gynecologist",
            Specialty::EyeSpecialist => "Eye Specialist",
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::Orthopedist => "Orthopedist",
            Specialty::Gastroenterologist => "Gastroenterologist",
        }
    }

    /// URL slug: lowercase name with every character outside `[a-z0-9]`
    /// replaced by `-`
    pub fn slug(&self) -> String {
        slugify(self.name())
    }
}

/// Lowercase `name` and replace each character outside `[a-z0-9]` with `-`
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect()
}

/// A specialization tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specialization {
    /// Display-only identifier
    pub id: u32,
    /// Specialty shown on the tile
    pub specialty: Specialty,
    /// Number of doctors practicing it
    pub doctors: u32,
}

/// Popular specializations on the Explorer screen
pub static SPECIALIZATIONS: &[Specialization] = &[
    Specialization { id: 1, specialty: Specialty::GeneralPhysician, doctors: 156 },
    Specialization { id: 2, specialty: Specialty::Dermatologist, doctors: 89 },
    Specialization { id: 3, specialty: Specialty::Gynecologist, doctors: 67 },
    Specialization { id: 4, specialty: Specialty::EyeSpecialist, doctors: 43 },
    Specialization { id: 5, specialty: Specialty::Cardiologist, doctors: 78 },
    Specialization { id: 6, specialty: Specialty::Neurologist, doctors: 32 },
    Specialization { id: 7, specialty: Specialty::Orthopedist, doctors: 54 },
    Specialization { id: 8, specialty: Specialty::Gastroenterologist, doctors: 41 },
];

// =============================================================================
// Doctor Summaries
// =============================================================================

/// Doctor as listed on the Explorer and Consult screens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    /// Display-only identifier, used in `/doctor/:id`
    pub id: u32,
    /// Full name
    pub name: &'static str,
    /// Specialty
    pub specialty: Specialty,
    /// Years in practice, e.g. "12 years"
    pub experience: &'static str,
    /// Average rating
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
    /// Consultation fee in rupees
    pub fee: u32,
    /// Portrait URL
    pub image: &'static str,
    /// Next free slot
    pub next_available: &'static str,
}

impl DoctorSummary {
    /// Fee as displayed (`₹800`)
    pub fn fee_label(&self) -> String {
        format_inr(self.fee)
    }
}

/// Top rated doctors
pub static TOP_DOCTORS: &[DoctorSummary] = &[
    DoctorSummary {
        id: 1,
        name: "Dr. Sarah Johnson",
        specialty: Specialty::Cardiologist,
        experience: "12 years",
        rating: 4.9,
        reviews: 256,
        fee: 800,
        image: "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg?auto=compress&cs=tinysrgb&w=400",
        next_available: "Today 3:00 PM",
    },
    DoctorSummary {
        id: 2,
        name: "Dr. Michael Chen",
        specialty: Specialty::Dermatologist,
        experience: "8 years",
        rating: 4.8,
        reviews: 189,
        fee: 600,
        image: "https://images.pexels.com/photos/6749778/pexels-photo-6749778.jpeg?auto=compress&cs=tinysrgb&w=400",
        next_available: "Tomorrow 10:00 AM",
    },
];

// =============================================================================
// Consultations
// =============================================================================

/// How a consultation takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationKind {
    /// Video call
    Video,
    /// Phone call
    Audio,
    /// Visit at the clinic
    InClinic,
    /// Doctor visits the patient
    HomeVisit,
}

impl ConsultationKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationKind::Video => "Video Consultation",
            ConsultationKind::Audio => "Audio Consultation",
            ConsultationKind::InClinic => "In-Clinic Visit",
            ConsultationKind::HomeVisit => "Home Visit",
        }
    }

    /// All kinds in display order
    pub fn all() -> [ConsultationKind; 4] {
        [
            ConsultationKind::Video,
            ConsultationKind::Audio,
            ConsultationKind::InClinic,
            ConsultationKind::HomeVisit,
        ]
    }
}

/// A bookable consultation option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultationOption {
    /// Consultation kind
    pub kind: ConsultationKind,
    /// Fee in rupees
    pub fee: u32,
    /// Slot length, e.g. "30 mins"
    pub duration: &'static str,
    /// Whether the option can be booked
    pub available: bool,
}

impl ConsultationOption {
    /// Fee as displayed
    pub fn fee_label(&self) -> String {
        format_inr(self.fee)
    }
}

/// Open slots per day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlots {
    /// Slots today
    pub today: &'static [&'static str],
    /// Slots tomorrow
    pub tomorrow: &'static [&'static str],
    /// Slots the day after tomorrow
    pub day_after: &'static [&'static str],
}

/// A patient review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Display-only identifier
    pub id: u32,
    /// Reviewer name
    pub name: &'static str,
    /// Star rating, 1-5
    pub rating: u8,
    /// Review text
    pub comment: &'static str,
    /// Relative date
    pub date: &'static str,
}

// =============================================================================
// Doctor Profile
// =============================================================================

/// Full doctor record shown on the detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    /// Display-only identifier
    pub id: u32,
    /// Full name
    pub name: &'static str,
    /// Specialty
    pub specialty: Specialty,
    /// Years in practice
    pub experience: &'static str,
    /// Average rating
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
    /// Portrait URL
    pub image: &'static str,
    /// Spoken languages
    pub languages: &'static [&'static str],
    /// Whether the registration is verified
    pub verified: bool,
    /// Degrees and fellowships
    pub qualifications: &'static [&'static str],
    /// Affiliated hospital
    pub hospital: &'static str,
    /// Practice location
    pub location: &'static str,
    /// Medical council registration number
    pub registration_id: &'static str,
    /// Biography
    pub bio: &'static str,
    /// Awards
    pub awards: &'static [&'static str],
    /// Consultation options
    pub consultation_types: &'static [ConsultationOption],
    /// Conditions treated
    pub conditions: &'static [&'static str],
    /// Open slots
    pub time_slots: TimeSlots,
}

/// The doctor shown on every doctor detail screen
pub static DOCTOR_PROFILE: DoctorProfile = DoctorProfile {
    id: 1,
    name: "Dr. Sarah Johnson",
    specialty: Specialty::Cardiologist,
    experience: "12 years",
    rating: 4.9,
    reviews: 256,
    image: "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg?auto=compress&cs=tinysrgb&w=400",
    languages: &["English", "Hindi"],
    verified: true,
    qualifications: &["MBBS", "MD Cardiology", "Fellowship in Interventional Cardiology"],
    hospital: "Apollo Hospital",
    location: "Bandra, Mumbai",
    registration_id: "MH12345",
    bio: "Dr. Sarah Johnson is a renowned cardiologist with over 12 years of experience in treating cardiovascular diseases. She specializes in interventional cardiology and has performed over 2000 successful procedures.",
    awards: &["Best Cardiologist 2023", "Excellence in Patient Care 2022"],
    consultation_types: &[
        ConsultationOption { kind: ConsultationKind::Video, fee: 800, duration: "30 mins", available: true },
        ConsultationOption { kind: ConsultationKind::Audio, fee: 600, duration: "20 mins", available: true },
        ConsultationOption { kind: ConsultationKind::InClinic, fee: 1000, duration: "45 mins", available: true },
        ConsultationOption { kind: ConsultationKind::HomeVisit, fee: 1500, duration: "60 mins", available: false },
    ],
    conditions: &[
        "Heart Disease",
        "Hypertension",
        "Arrhythmia",
        "Chest Pain",
        "Heart Attack",
        "Coronary Artery Disease",
        "Heart Failure",
    ],
    time_slots: TimeSlots {
        today: &["3:00 PM", "4:30 PM", "6:00 PM"],
        tomorrow: &["10:00 AM", "11:30 AM", "2:00 PM", "3:30 PM", "5:00 PM"],
        day_after: &["9:00 AM", "10:30 AM", "12:00 PM", "1:30 PM", "4:00 PM"],
    },
};

/// Reviews for the detail doctor
pub static DOCTOR_REVIEWS: &[Review] = &[
    Review {
        id: 1,
        name: "Rajesh Kumar",
        rating: 5,
        comment: "Excellent doctor! Very thorough examination and clear explanation of the condition.",
        date: "2 days ago",
    },
    Review {
        id: 2,
        name: "Priya Sharma",
        rating: 5,
        comment: "Dr. Johnson is very professional and caring. Highly recommended for heart problems.",
        date: "1 week ago",
    },
    Review {
        id: 3,
        name: "Amit Patel",
        rating: 4,
        comment: "Good consultation. The doctor listened to all my concerns patiently.",
        date: "2 weeks ago",
    },
];

/// Doctor record for a detail route
///
/// The id is not used for filtering; every id yields the fixed mock profile.
pub fn doctor_profile(_id: &str) -> &'static DoctorProfile {
    &DOCTOR_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_slugs() {
        assert_eq!(Specialty::GeneralPhysician.slug(), "general-physician");
        assert_eq!(Specialty::EyeSpecialist.slug(), "eye-specialist");
        assert_eq!(Specialty::Cardiologist.slug(), "cardiologist");
    }

    #[test]
    fn test_slugify_replaces_each_char() {
        assert_eq!(slugify("Ear, Nose & Throat"), "ear--nose---throat");
        assert_eq!(slugify("COVID 19"), "covid-19");
    }

    #[test]
    fn test_doctor_profile_ignores_id() {
        assert_eq!(doctor_profile("1"), &DOCTOR_PROFILE);
        assert_eq!(doctor_profile("999"), &DOCTOR_PROFILE);
        assert_eq!(doctor_profile("not-a-number"), &DOCTOR_PROFILE);
    }

    #[test]
    fn test_home_visit_unavailable() {
        let home = DOCTOR_PROFILE
            .consultation_types
            .iter()
            .find(|c| c.kind == ConsultationKind::HomeVisit)
            .unwrap();
        assert!(!home.available);
        assert_eq!(home.fee_label(), "₹1,500");
    }

    #[test]
    fn test_review_ratings_in_range() {
        for review in DOCTOR_REVIEWS {
            assert!((1..=5).contains(&review.rating));
        }
    }

    #[test]
    fn test_consultation_labels() {
        let labels: Vec<&str> = ConsultationKind::all().iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["Video Consultation", "Audio Consultation", "In-Clinic Visit", "Home Visit"]
        );
    }
}
