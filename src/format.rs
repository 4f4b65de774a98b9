// Display formatting for metric values, plus the risk-score bucketing used
// across dashboard, retention list and lookup.

pub const RISK_CRITICAL: f64 = 90.0;
pub const RISK_HIGH: f64 = 80.0;
pub const RISK_MEDIUM: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn bucket(score: f64) -> Self {
        if score >= RISK_CRITICAL {
            RiskLevel::Critical
        } else if score >= RISK_HIGH {
            RiskLevel::High
        } else if score >= RISK_MEDIUM {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

// Buckets for coloring correlation cells, by |r| with the sign kept aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Mild,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    pub fn bucket(r: f64) -> Self {
        let a = r.abs();
        if a >= 0.7 {
            CorrelationStrength::Strong
        } else if a >= 0.5 {
            CorrelationStrength::Moderate
        } else if a >= 0.3 {
            CorrelationStrength::Mild
        } else if a >= 0.1 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        }
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_rwf(value: f64) -> String {
    format!("{} RWF", thousands(value.round() as i64))
}

pub fn format_tenure(years: f64) -> String {
    format!("{}y", years)
}

pub fn format_count(value: u64) -> String {
    thousands(value as i64)
}

fn thousands(mut n: i64) -> String {
    let negative = n < 0;
    n = n.abs();
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}
