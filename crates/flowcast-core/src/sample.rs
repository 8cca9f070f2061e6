//! Built-in sample request
//!
//! Six months of a mid-sized technology company, used by `flowcast sample`,
//! `flowcast check` and the test suites.

use crate::models::{AnalysisRequest, CompanyProfile, MonthlyRecord};

pub fn sample_request() -> AnalysisRequest {
    AnalysisRequest {
        company: CompanyProfile {
            id: "TEST001".to_string(),
            name: "Test Company Ltd.".to_string(),
            sector: "Technology".to_string(),
            monthly_avg_income: 500_000.0,
            monthly_avg_expense: 400_000.0,
        },
        historical_data: vec![
            MonthlyRecord::new("March", 450_000.0, 380_000.0),
            MonthlyRecord::new("April", 420_000.0, 350_000.0),
            MonthlyRecord::new("May", 480_000.0, 400_000.0),
            MonthlyRecord::new("June", 550_000.0, 440_000.0),
            MonthlyRecord::new("July", 600_000.0, 480_000.0),
            MonthlyRecord::new("August", 580_000.0, 460_000.0),
        ],
        as_of: None,
    }
}
