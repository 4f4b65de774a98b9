// The embedded mock dataset. Every number here is a literal carried over from
// the analytics backend snapshot; nothing is computed at runtime.

use crate::schema::{FieldSpec, FieldType, Record, Schema, Value};

pub const ACCOUNT_TYPES: &[&str] = &["Premium", "Standard", "Basic"];

// A labelled half-open numeric interval [low, high). Open ends are None.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub label: &'static str,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub const AGE_BANDS: &[Band] = &[
    Band { label: "18-25", low: Some(18.0), high: Some(26.0) },
    Band { label: "26-35", low: Some(26.0), high: Some(36.0) },
    Band { label: "36-50", low: Some(36.0), high: Some(50.0) },
    Band { label: "50+", low: Some(50.0), high: None },
];

pub const TENURE_BANDS: &[Band] = &[
    Band { label: "<1", low: None, high: Some(1.0) },
    Band { label: "1-2", low: Some(1.0), high: Some(2.0) },
    Band { label: "2-5", low: Some(2.0), high: Some(5.0) },
    Band { label: "5+", low: Some(5.0), high: None },
];

pub const RISK_BANDS: &[Band] = &[
    Band { label: "90+", low: Some(90.0), high: None },
    Band { label: "80-90", low: Some(80.0), high: Some(90.0) },
    Band { label: "70-80", low: Some(70.0), high: Some(80.0) },
    Band { label: "<70", low: None, high: Some(70.0) },
];

pub fn retention_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("id", "Customer ID", FieldType::Text).searchable(),
        FieldSpec::new("name", "Name", FieldType::Text).searchable(),
        FieldSpec::new("account_type", "Account Type", FieldType::Categorical),
        FieldSpec::new("balance", "Balance", FieldType::Numeric),
        FieldSpec::new("churn_probability", "Churn Probability", FieldType::Numeric),
        FieldSpec::new("tenure", "Tenure", FieldType::Numeric),
        FieldSpec::new("age", "Age", FieldType::Numeric),
        FieldSpec::new("risk_score", "Risk Score", FieldType::Numeric),
        FieldSpec::new("products", "Products", FieldType::Text),
        FieldSpec::new("last_activity", "Last Activity", FieldType::Text),
    ])
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    account_type: &str,
    balance: f64,
    churn_probability: f64,
    tenure: f64,
    age: f64,
    risk_score: f64,
    products: &str,
    last_activity: &str,
) -> Record {
    Record::new(id)
        .field("name", Value::Text(name.to_string()))
        .field("account_type", Value::Text(account_type.to_string()))
        .field("balance", Value::Num(balance))
        .field("churn_probability", Value::Num(churn_probability))
        .field("tenure", Value::Num(tenure))
        .field("age", Value::Num(age))
        .field("risk_score", Value::Num(risk_score))
        .field("products", Value::Text(products.to_string()))
        .field("last_activity", Value::Text(last_activity.to_string()))
}

// Balances are RWF.
pub fn retention_customers() -> Vec<Record> {
    vec![
        customer(
            "1000001", "Mukamana Grace", "Premium", 2_500_000.0, 89.5, 2.3, 34.0, 94.2,
            "Checking, Savings, Credit Card, Mobile Money", "2 days ago",
        ),
        customer(
            "1000002", "Nkurunziza Jean", "Standard", 650_000.0, 87.2, 1.8, 28.0, 91.8,
            "Checking, Savings, Mobile Money", "5 days ago",
        ),
        customer(
            "1000003", "Uwimana Marie", "Premium", 4_200_000.0, 84.1, 4.2, 42.0, 89.5,
            "Checking, Savings, SACCO, Mobile Money", "1 day ago",
        ),
        customer(
            "1000004", "Mugisha Paul", "Basic", 300_000.0, 82.7, 1.2, 25.0, 88.3,
            "Checking, Mobile Money", "3 days ago",
        ),
        customer(
            "1000005", "Nyiraneza Claire", "Premium", 1_200_000.0, 79.8, 3.7, 38.0, 86.9,
            "Checking, Savings, Credit Card, Mobile Money", "4 days ago",
        ),
        customer(
            "1000006", "Habyarimana Joseph", "Standard", 800_000.0, 76.3, 2.1, 45.0, 83.2,
            "Checking, Savings, Mobile Money", "6 days ago",
        ),
        customer(
            "1000007", "Mukamana Jennifer", "Premium", 1_700_000.0, 74.8, 5.3, 52.0, 81.5,
            "Checking, Savings, Investment, Credit Card", "2 days ago",
        ),
        customer(
            "1000008", "James Wilson", "Basic", 8_900.0, 72.1, 0.8, 22.0, 79.8,
            "Checking", "7 days ago",
        ),
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardMetrics {
    pub total_customers: u64,
    pub at_risk_customers: u64,
    pub avg_account_balance: f64,
    pub avg_tenure: f64,
    pub churn_rate: f64,
    pub retention_rate: f64,
}

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_customers: 45_678,
        at_risk_customers: 13_520,
        avg_account_balance: 1_250_000.0,
        avg_tenure: 3.2,
        churn_rate: 29.6,
        retention_rate: 70.4,
    }
}

pub const MONTH_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Monthly churn rates in percent. December actuals are not in yet.
pub const PREDICTED_CHURN: &[f64] =
    &[4.2, 4.8, 5.1, 4.9, 5.3, 5.0, 4.7, 4.5, 4.8, 5.2, 4.9, 5.1];
pub const ACTUAL_CHURN: &[Option<f64>] = &[
    Some(4.1), Some(4.9), Some(5.0), Some(4.8), Some(5.4), Some(4.9),
    Some(4.6), Some(4.4), Some(4.7), Some(5.3), Some(4.8), None,
];

pub const FEATURE_LABELS: &[&str] = &[
    "Account Balance",
    "Transaction Frequency",
    "Age",
    "Tenure",
    "Credit Score",
    "Product Usage",
    "Mobile Banking",
    "Branch Visits",
];
pub const FEATURE_IMPORTANCE: &[f64] = &[0.24, 0.19, 0.15, 0.12, 0.10, 0.08, 0.07, 0.05];

// Churn rate in percent per age group, aligned with AGE_BANDS.
pub const CHURN_BY_AGE: &[f64] = &[7.8, 6.5, 4.5, 3.2];

pub const PRODUCT_MIX_LABELS: &[&str] =
    &["Checking Only", "Checking + Savings", "Multiple Products", "Full Suite"];
pub const CHURN_BY_PRODUCT_MIX: &[f64] = &[8.5, 6.2, 3.8, 2.1];

// Feature order of the correlation matrix; differs from the importance
// ranking above, which is sorted by weight.
pub const CORRELATION_LABELS: &[&str] = &[
    "Age",
    "Account Balance",
    "Transaction Frequency",
    "Tenure",
    "Credit Score",
    "Product Usage",
    "Mobile Banking",
    "Branch Visits",
];

// Pearson correlations between features, row i vs column j.
pub const CORRELATION_MATRIX: &[[f64; 8]] = &[
    [1.00, -0.15, 0.23, 0.31, 0.28, -0.12, -0.08, 0.05],
    [-0.15, 1.00, 0.45, 0.38, 0.42, 0.51, 0.18, -0.21],
    [0.23, 0.45, 1.00, 0.29, 0.35, 0.38, 0.52, -0.15],
    [0.31, 0.38, 0.29, 1.00, 0.41, 0.33, 0.25, 0.12],
    [0.28, 0.42, 0.35, 0.41, 1.00, 0.29, 0.18, -0.08],
    [-0.12, 0.51, 0.38, 0.33, 0.29, 1.00, 0.31, -0.18],
    [-0.08, 0.18, 0.52, 0.25, 0.18, 0.31, 1.00, -0.22],
    [0.05, -0.21, -0.15, 0.12, -0.08, -0.18, -0.22, 1.00],
];

// Classifier evaluation numbers from the notebook run.
#[derive(Debug, Clone, Copy)]
pub struct ModelPerformance {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc: f64,
    // [[true neg, false pos], [false neg, true pos]]
    pub confusion: [[u64; 2]; 2],
}

pub fn model_performance() -> ModelPerformance {
    ModelPerformance {
        accuracy: 89.2,
        precision: 87.5,
        recall: 91.3,
        f1_score: 89.3,
        auc: 0.46,
        confusion: [[26, 143], [11, 60]],
    }
}

// Headline numbers of the overview report.
#[derive(Debug, Clone, Copy)]
pub struct ReportSummary {
    pub churn_rate: f64,
    pub retention_rate: f64,
    pub revenue_at_risk: &'static str,
}

pub fn report_summary() -> ReportSummary {
    ReportSummary {
        churn_rate: 5.12,
        retention_rate: 94.88,
        revenue_at_risk: "2.4B RWF",
    }
}

// (false positive rate, true positive rate) samples of the ROC curve.
pub const ROC_CURVE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.1, 0.12),
    (0.2, 0.18),
    (0.3, 0.25),
    (0.4, 0.32),
    (0.5, 0.38),
    (0.6, 0.42),
    (0.7, 0.44),
    (0.8, 0.45),
    (0.9, 0.46),
    (1.0, 0.46),
];

// (recall, precision) samples.
pub const PRECISION_RECALL_CURVE: &[(f64, f64)] = &[
    (0.0, 0.85),
    (0.1, 0.82),
    (0.2, 0.78),
    (0.3, 0.72),
    (0.4, 0.65),
    (0.5, 0.58),
    (0.6, 0.52),
    (0.7, 0.47),
    (0.8, 0.42),
    (0.9, 0.38),
    (1.0, 0.35),
];

pub const QUARTER_LABELS: &[&str] =
    &["Q1 (Jan-Mar)", "Q2 (Apr-Jun)", "Q3 (Jul-Sep)", "Q4 (Oct-Dec)"];
pub const CHURN_BY_QUARTER: &[f64] = &[5.8, 6.2, 4.9, 3.8];

// Extended profile details shown on the lookup page. The backend snapshot
// only carries these for a single fixture, so they are shown for whichever
// customer matches.
#[derive(Debug, Clone, Copy)]
pub struct ProfileExtras {
    pub email: &'static str,
    pub phone: &'static str,
    pub credit_score: u32,
    pub address: &'static str,
    pub last_login: &'static str,
    pub txn_frequency: f64,
    pub txn_avg_value: f64,
    pub mobile_usage: f64,
    pub branch_visits: u32,
    pub complaints: &'static [(&'static str, &'static str, &'static str)],
}

pub fn profile_extras() -> ProfileExtras {
    ProfileExtras {
        email: "grace.mukamana@email.com",
        phone: "+250 788 123 456",
        credit_score: 745,
        address: "KG 123 St, Kigali, Rwanda",
        last_login: "2 days ago",
        txn_frequency: 12.5,
        txn_avg_value: 45_000.0,
        mobile_usage: 95.0,
        branch_visits: 1,
        complaints: &[
            ("2024-01-15", "Service", "Resolved"),
            ("2023-12-03", "Fee", "Resolved"),
        ],
    }
}
