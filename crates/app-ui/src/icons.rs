//! Icon identifiers and data-driven icon selection
//!
//! Icons are a closed set. Screens that pick an icon from data (a quick
//! action, a specialty, a consultation kind) go through the lookup tables
//! here, which pair each kind with an icon and the color role it is drawn in.

use app_core::{ConsultationKind, ProfileMenuItem, QuickAction, Specialty};
use serde::{Deserialize, Serialize};

use crate::theme::ColorRole;

/// Icons available to screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    /// Back arrow
    ArrowLeft,
    /// Activity pulse
    Activity,
    /// Award ribbon
    Award,
    /// Baby
    Baby,
    /// Notification bell
    Bell,
    /// Bone
    Bone,
    /// Brain
    Brain,
    /// Calendar
    Calendar,
    /// Check mark in a circle
    CheckCircle,
    /// Right chevron
    ChevronRight,
    /// Clock
    Clock,
    /// Eye
    Eye,
    /// Document
    FileText,
    /// Filter funnel
    Filter,
    /// Heart
    Heart,
    /// Question mark in a circle
    HelpCircle,
    /// Map pin
    MapPin,
    /// Chat bubble
    MessageCircle,
    /// Crescent moon
    Moon,
    /// Phone handset
    Phone,
    /// Magnifier
    Search,
    /// Gear
    Settings,
    /// Shield
    Shield,
    /// Star
    Star,
    /// Stethoscope
    Stethoscope,
    /// Sun
    Sun,
    /// Test tube
    TestTube,
    /// Single person
    User,
    /// Group of people
    Users,
    /// Video camera
    Video,
    /// Wallet
    Wallet,
}

impl IconName {
    /// Icon name as used by the icon set
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::ArrowLeft => "arrow-left",
            IconName::Activity => "activity",
            IconName::Award => "award",
            IconName::Baby => "baby",
            IconName::Bell => "bell",
            IconName::Bone => "bone",
            IconName::Brain => "brain",
            IconName::Calendar => "calendar",
            IconName::CheckCircle => "check-circle",
            IconName::ChevronRight => "chevron-right",
            IconName::Clock => "clock",
            IconName::Eye => "eye",
            IconName::FileText => "file-text",
            IconName::Filter => "filter",
            IconName::Heart => "heart",
            IconName::HelpCircle => "help-circle",
            IconName::MapPin => "map-pin",
            IconName::MessageCircle => "message-circle",
            IconName::Moon => "moon",
            IconName::Phone => "phone",
            IconName::Search => "search",
            IconName::Settings => "settings",
            IconName::Shield => "shield",
            IconName::Star => "star",
            IconName::Stethoscope => "stethoscope",
            IconName::Sun => "sun",
            IconName::TestTube => "test-tube",
            IconName::User => "user",
            IconName::Users => "users",
            IconName::Video => "video",
            IconName::Wallet => "wallet",
        }
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An icon and the role it is drawn in
pub type IconSpec = (IconName, ColorRole);

/// Quick action tile icon
pub fn quick_action_icon(action: QuickAction) -> IconSpec {
    match action {
        QuickAction::BookTest => (IconName::TestTube, ColorRole::Primary),
        QuickAction::FindDoctor => (IconName::Stethoscope, ColorRole::Success),
        QuickAction::Wallet => (IconName::Wallet, ColorRole::Warning),
        QuickAction::Appointments => (IconName::Calendar, ColorRole::Info),
    }
}

/// Specialization tile icon
pub fn specialty_icon(specialty: Specialty) -> IconSpec {
    match specialty {
        Specialty::GeneralPhysician => (IconName::Stethoscope, ColorRole::Primary),
        Specialty::Dermatologist => (IconName::Heart, ColorRole::Error),
        Specialty::Gynecologist => (IconName::Baby, ColorRole::Accent),
        Specialty::EyeSpecialist => (IconName::Eye, ColorRole::Info),
        Specialty::Cardiologist => (IconName::Heart, ColorRole::Error),
        Specialty::Neurologist => (IconName::Brain, ColorRole::Primary),
        Specialty::Orthopedist => (IconName::Bone, ColorRole::Success),
        Specialty::Gastroenterologist => (IconName::Activity, ColorRole::Warning),
    }
}

/// Consultation option icon
pub fn consultation_icon(kind: ConsultationKind) -> IconSpec {
    match kind {
        ConsultationKind::Video => (IconName::Video, ColorRole::Primary),
        ConsultationKind::Audio => (IconName::Phone, ColorRole::Success),
        ConsultationKind::InClinic => (IconName::MapPin, ColorRole::Warning),
        ConsultationKind::HomeVisit => (IconName::Users, ColorRole::Info),
    }
}

/// Profile menu row icon
pub fn menu_icon(item: ProfileMenuItem) -> IconSpec {
    match item {
        ProfileMenuItem::Appointments => (IconName::Calendar, ColorRole::Info),
        ProfileMenuItem::MedicalRecords => (IconName::FileText, ColorRole::Primary),
        ProfileMenuItem::Wallet => (IconName::Wallet, ColorRole::Warning),
        ProfileMenuItem::FamilyMembers => (IconName::Users, ColorRole::Accent),
        ProfileMenuItem::Help => (IconName::HelpCircle, ColorRole::Success),
        ProfileMenuItem::Settings => (IconName::Settings, ColorRole::TextSecondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_matches_serialization() {
        for icon in [IconName::TestTube, IconName::CheckCircle, IconName::ArrowLeft] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }

    #[test]
    fn test_quick_action_icons() {
        assert_eq!(
            quick_action_icon(QuickAction::BookTest),
            (IconName::TestTube, ColorRole::Primary)
        );
        assert_eq!(
            quick_action_icon(QuickAction::Appointments),
            (IconName::Calendar, ColorRole::Info)
        );
    }

    #[test]
    fn test_specialty_icons_share_heart() {
        assert_eq!(
            specialty_icon(Specialty::Dermatologist),
            specialty_icon(Specialty::Cardiologist)
        );
        assert_eq!(specialty_icon(Specialty::Orthopedist).0, IconName::Bone);
    }

    #[test]
    fn test_consultation_icons_are_distinct() {
        let icons: Vec<IconName> = ConsultationKind::all()
            .into_iter()
            .map(|kind| consultation_icon(kind).0)
            .collect();
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_menu_icons() {
        assert_eq!(menu_icon(ProfileMenuItem::Settings).0, IconName::Settings);
        assert_eq!(menu_icon(ProfileMenuItem::Wallet).1, ColorRole::Warning);
    }
}
