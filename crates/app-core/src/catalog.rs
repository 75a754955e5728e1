//! Diagnostic test catalog
//!
//! Featured blood tests, health packages and test categories shown on the
//! Explorer and Lab Tests screens. All records are literal data.

use serde::Serialize;

use crate::money::{discount_label, format_inr};

/// A featured blood test card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTest {
    /// Display-only identifier
    pub id: u32,
    /// Test name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Price in rupees
    pub price: u32,
    /// Price before discount in rupees
    pub original_price: u32,
    /// Advertised discount percentage
    pub discount_percent: u8,
    /// Number of measured parameters
    pub parameters: u32,
    /// Report turnaround, e.g. "4-6 hours"
    pub report_time: &'static str,
    /// Card image URL
    pub image: &'static str,
}

impl LabTest {
    /// Price as displayed (`₹299`)
    pub fn price_label(&self) -> String {
        format_inr(self.price)
    }

    /// Original price as displayed
    pub fn original_price_label(&self) -> String {
        format_inr(self.original_price)
    }

    /// Discount badge text (`33% OFF`)
    pub fn discount_label(&self) -> String {
        discount_label(self.discount_percent)
    }
}

/// A bundled health checkup package
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPackage {
    /// Display-only identifier
    pub id: u32,
    /// Package name
    pub name: &'static str,
    /// Number of included tests
    pub tests: u32,
    /// Price in rupees
    pub price: u32,
    /// Price before discount in rupees
    pub original_price: u32,
    /// Advertised discount percentage
    pub discount_percent: u8,
    /// Sample processing duration
    pub duration: &'static str,
    /// Average rating
    pub rating: f32,
    /// One-line description
    pub description: &'static str,
}

impl HealthPackage {
    /// Price as displayed (`₹2,499`)
    pub fn price_label(&self) -> String {
        format_inr(self.price)
    }

    /// Original price as displayed
    pub fn original_price_label(&self) -> String {
        format_inr(self.original_price)
    }

    /// Discount badge text
    pub fn discount_label(&self) -> String {
        discount_label(self.discount_percent)
    }
}

/// A browsable test category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCategory {
    /// Display-only identifier, used in `/test-category/:id`
    pub id: u32,
    /// Category name
    pub name: &'static str,
    /// Number of tests in the category
    pub tests: u32,
    /// Whether the category carries the "Popular" badge
    pub popular: bool,
}

/// Featured blood tests on the Explorer screen
pub static FEATURED_TESTS: &[LabTest] = &[
    LabTest {
        id: 1,
        name: "Complete Blood Count",
        description: "Comprehensive blood analysis",
        price: 299,
        original_price: 450,
        discount_percent: 33,
        parameters: 8,
        report_time: "4-6 hours",
        image: "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    LabTest {
        id: 2,
        name: "Lipid Profile",
        description: "Cholesterol & heart health",
        price: 349,
        original_price: 500,
        discount_percent: 30,
        parameters: 5,
        report_time: "6-8 hours",
        image: "https://images.pexels.com/photos/4021775/pexels-photo-4021775.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    LabTest {
        id: 3,
        name: "Thyroid Profile",
        description: "Complete thyroid function",
        price: 449,
        original_price: 650,
        discount_percent: 31,
        parameters: 5,
        report_time: "12-24 hours",
        image: "https://images.pexels.com/photos/356040/pexels-photo-356040.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

/// Featured packages on the Lab Tests screen
pub static HEALTH_PACKAGES: &[HealthPackage] = &[
    HealthPackage {
        id: 1,
        name: "Annual Health Checkup",
        tests: 45,
        price: 2499,
        original_price: 4500,
        discount_percent: 44,
        duration: "6-8 hours",
        rating: 4.8,
        description: "Comprehensive health screening package",
    },
    HealthPackage {
        id: 2,
        name: "Master Health Checkup",
        tests: 78,
        price: 4999,
        original_price: 8500,
        discount_percent: 41,
        duration: "8-10 hours",
        rating: 4.9,
        description: "Complete body health assessment",
    },
];

/// Popular test categories on the Lab Tests screen
pub static TEST_CATEGORIES: &[TestCategory] = &[
    TestCategory { id: 1, name: "Complete Blood Count", tests: 15, popular: true },
    TestCategory { id: 2, name: "Diabetes Profile", tests: 8, popular: true },
    TestCategory { id: 3, name: "Lipid Profile", tests: 6, popular: false },
    TestCategory { id: 4, name: "Liver Function", tests: 12, popular: true },
    TestCategory { id: 5, name: "Kidney Function", tests: 9, popular: false },
    TestCategory { id: 6, name: "Thyroid Profile", tests: 7, popular: true },
    TestCategory { id: 7, name: "Cardiac Markers", tests: 11, popular: false },
    TestCategory { id: 8, name: "Hormone Panel", tests: 18, popular: false },
];
