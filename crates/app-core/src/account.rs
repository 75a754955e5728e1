//! Signed-in user, quick actions and profile menu
//!
//! There is no authentication; the user is a fixed demo account.

use serde::Serialize;

/// The demo user shown on Explorer and Profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Full name
    pub name: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Contact phone
    pub phone: &'static str,
    /// Avatar URL
    pub avatar: &'static str,
    /// Health score, 0-100
    pub health_score: u8,
    /// Wallet balance in rupees
    pub wallet_balance: u32,
    /// Number of booked appointments
    pub appointments: u32,
    /// Number of stored reports
    pub reports: u32,
}

/// The signed-in demo user
pub static CURRENT_USER: UserProfile = UserProfile {
    name: "John Doe",
    email: "john.doe@example.com",
    phone: "+91 98765 01234",
    avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=400",
    health_score: 75,
    wallet_balance: 1250,
    appointments: 3,
    reports: 12,
};

/// Shortcut tiles on the Explorer screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
    /// Book a lab test
    BookTest,
    /// Find a doctor
    FindDoctor,
    /// Open the wallet
    Wallet,
    /// View appointments
    Appointments,
}

impl QuickAction {
    /// Tile title
    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::BookTest => "Book Test",
            QuickAction::FindDoctor => "Find Doctor",
            QuickAction::Wallet => "My Wallet",
            QuickAction::Appointments => "Appointments",
        }
    }

    /// All tiles in display order
    pub fn all() -> [QuickAction; 4] {
        [
            QuickAction::BookTest,
            QuickAction::FindDoctor,
            QuickAction::Wallet,
            QuickAction::Appointments,
        ]
    }
}

/// Entries of the Profile screen menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileMenuItem {
    /// Booked appointments
    Appointments,
    /// Lab reports and prescriptions
    MedicalRecords,
    /// Wallet and payments
    Wallet,
    /// Family members
    FamilyMembers,
    /// Help center
    Help,
    /// App settings
    Settings,
}

impl ProfileMenuItem {
    /// Row title
    pub fn title(&self) -> &'static str {
        match self {
            ProfileMenuItem::Appointments => "My Appointments",
            ProfileMenuItem::MedicalRecords => "Medical Records",
            ProfileMenuItem::Wallet => "Wallet & Payments",
            ProfileMenuItem::FamilyMembers => "Family Members",
            ProfileMenuItem::Help => "Help & Support",
            ProfileMenuItem::Settings => "Settings",
        }
    }

    /// All rows in display order
    pub fn all() -> [ProfileMenuItem; 6] {
        [
            ProfileMenuItem::Appointments,
            ProfileMenuItem::MedicalRecords,
            ProfileMenuItem::Wallet,
            ProfileMenuItem::FamilyMembers,
            ProfileMenuItem::Help,
            ProfileMenuItem::Settings,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_action_titles() {
        let titles: Vec<&str> = QuickAction::all().iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["Book Test", "Find Doctor", "My Wallet", "Appointments"]);
    }

    #[test]
    fn test_current_user() {
        assert_eq!(CURRENT_USER.name, "John Doe");
        assert!(CURRENT_USER.health_score <= 100);
    }

    #[test]
    fn test_menu_item_serialization() {
        let json = serde_json::to_string(&ProfileMenuItem::MedicalRecords).unwrap();
        assert_eq!(json, "\"medical-records\"");
    }
}
