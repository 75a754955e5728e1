//! Diagnostic centers

use serde::Serialize;

use crate::money::format_inr;

/// Center as listed on the Explorer screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterSummary {
    /// Display-only identifier, used in `/diagnostic-center/:id`
    pub id: u32,
    /// Center name
    pub name: &'static str,
    /// Neighbourhood and city
    pub address: &'static str,
    /// Distance from the user
    pub distance: &'static str,
    /// Average rating
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
    /// Number of tests offered
    pub tests_available: u32,
    /// Photo URL
    pub image: &'static str,
}

/// A test offered at the detail center
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterTest {
    /// Display-only identifier
    pub id: u32,
    /// Test name
    pub name: &'static str,
    /// Measured parameters
    pub parameters: &'static [&'static str],
    /// Price in rupees
    pub price: u32,
    /// Price before discount in rupees
    pub original_price: u32,
    /// Report turnaround
    pub report_time: &'static str,
    /// One-line description
    pub description: &'static str,
}

impl CenterTest {
    /// Price as displayed
    pub fn price_label(&self) -> String {
        format_inr(self.price)
    }

    /// Original price as displayed
    pub fn original_price_label(&self) -> String {
        format_inr(self.original_price)
    }
}

/// Full center record shown on the detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticCenter {
    /// Display-only identifier
    pub id: u32,
    /// Center name
    pub name: &'static str,
    /// Neighbourhood and city
    pub address: &'static str,
    /// Distance from the user
    pub distance: &'static str,
    /// Average rating
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
    /// Opening hours
    pub open_time: &'static str,
    /// Contact number
    pub phone: &'static str,
    /// Whether the center is verified
    pub verified: bool,
    /// Service highlights
    pub features: &'static [&'static str],
    /// Long description
    pub description: &'static str,
    /// Hero image URL
    pub image: &'static str,
    /// Tests with parameters and pricing
    pub tests: &'static [CenterTest],
}

/// Diagnostic centers on the Explorer screen
pub static DIAGNOSTIC_CENTERS: &[CenterSummary] = &[
    CenterSummary {
        id: 1,
        name: "Apollo Diagnostics",
        address: "Bandra West, Mumbai",
        distance: "2.5 km",
        rating: 4.8,
        reviews: 342,
        tests_available: 450,
        image: "https://images.pexels.com/photos/263402/pexels-photo-263402.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    CenterSummary {
        id: 2,
        name: "Dr. Lal PathLabs",
        address: "Andheri East, Mumbai",
        distance: "3.2 km",
        rating: 4.7,
        reviews: 567,
        tests_available: 380,
        image: "https://images.pexels.com/photos/356040/pexels-photo-356040.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

/// The center shown on every diagnostic center detail screen
pub static DIAGNOSTIC_CENTER: DiagnosticCenter = DiagnosticCenter {
    id: 1,
    name: "MediCare Diagnostics",
    address: "Gomti Nagar, Lucknow",
    distance: "2.5 km",
    rating: 4.8,
    reviews: 342,
    open_time: "7:00 AM - 9:00 PM",
    phone: "+91 98765 43210",
    verified: true,
    features: &["Home Collection", "Online Reports", "NABL Certified", "24/7 Service"],
    description: "MediCare Diagnostics is a trusted name in healthcare, offering a wide range of diagnostic tests with advanced technology and a patient-centric approach. Our state-of-the-art facility is equipped with the latest diagnostic equipment and staffed by experienced professionals committed to providing accurate and timely results.",
    image: "https://images.pexels.com/photos/263402/pexels-photo-263402.jpeg?auto=compress&cs=tinysrgb&w=800",
    tests: &[
        CenterTest {
            id: 1,
            name: "Complete Blood Count (CBC)",
            parameters: &["Hemoglobin", "RBC Count", "WBC Count", "Platelet Count", "Hematocrit"],
            price: 299,
            original_price: 450,
            report_time: "4-6 hours",
            description: "Comprehensive blood analysis to check overall health status",
        },
        CenterTest {
            id: 2,
            name: "Lipid Profile",
            parameters: &["Total Cholesterol", "LDL", "HDL", "Triglycerides", "VLDL"],
            price: 349,
            original_price: 500,
            report_time: "6-8 hours",
            description: "Evaluates cardiovascular risk and cholesterol levels",
        },
        CenterTest {
            id: 3,
            name: "Liver Function Test",
            parameters: &["SGPT", "SGOT", "Bilirubin", "Alkaline Phosphatase", "Protein"],
            price: 399,
            original_price: 600,
            report_time: "8-12 hours",
            description: "Assesses liver health and function",
        },
        CenterTest {
            id: 4,
            name: "Kidney Function Test",
            parameters: &["Creatinine", "Urea", "BUN", "Uric Acid", "Electrolytes"],
            price: 299,
            original_price: 450,
            report_time: "6-8 hours",
            description: "Evaluates kidney health and function",
        },
        CenterTest {
            id: 5,
            name: "Thyroid Profile",
            parameters: &["TSH", "T3", "T4", "Free T3", "Free T4"],
            price: 449,
            original_price: 650,
            report_time: "12-24 hours",
            description: "Comprehensive thyroid function assessment",
        },
        CenterTest {
            id: 6,
            name: "Diabetes Profile",
            parameters: &["Fasting Glucose", "HbA1c", "Post Meal Glucose", "Insulin"],
            price: 599,
            original_price: 850,
            report_time: "4-6 hours",
            description: "Complete diabetes screening and monitoring",
        },
    ],
};

/// Center record for a detail route
///
/// The id is not used for filtering; every id yields the fixed mock center.
pub fn diagnostic_center(_id: &str) -> &'static DiagnosticCenter {
    &DIAGNOSTIC_CENTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_lookup_ignores_id() {
        assert_eq!(diagnostic_center("1").name, "MediCare Diagnostics");
        assert_eq!(diagnostic_center("42").name, "MediCare Diagnostics");
        assert_eq!(diagnostic_center("").name, "MediCare Diagnostics");
    }

    #[test]
    fn test_center_tests() {
        assert_eq!(DIAGNOSTIC_CENTER.tests.len(), 6);
        let diabetes = &DIAGNOSTIC_CENTER.tests[5];
        assert_eq!(diabetes.parameters.len(), 4);
        assert_eq!(diabetes.price_label(), "₹599");
        assert_eq!(diabetes.original_price_label(), "₹850");
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(&DIAGNOSTIC_CENTERS[0]).unwrap();
        assert_eq!(json["testsAvailable"], 450);
        assert_eq!(json["address"], "Bandra West, Mumbai");
    }
}
