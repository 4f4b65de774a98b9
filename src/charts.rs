// Reshape domain series into the tuples the tui chart widgets consume.

// Bars render integer heights; scale lifts fractional series (e.g. feature
// importances in [0, 1]) into a visible range first.
pub fn bar_data(
    labels: &'static [&'static str],
    values: &[f64],
    scale: f64,
) -> Vec<(&'static str, u64)> {
    labels
        .iter()
        .zip(values)
        .map(|(&label, &v)| (label, (v * scale).round().max(0.0) as u64))
        .collect()
}

pub fn line_points(values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect()
}

// Missing samples (months without actuals yet) are skipped, not zeroed.
pub fn sparse_line_points(values: &[Option<f64>]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
        .collect()
}

pub fn y_bounds(series: &[&[(f64, f64)]]) -> [f64; 2] {
    let max = series
        .iter()
        .flat_map(|s| s.iter().map(|&(_, y)| y))
        .fold(0.0_f64, f64::max);
    [0.0, max.ceil()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ACTUAL_CHURN, FEATURE_IMPORTANCE, FEATURE_LABELS, PREDICTED_CHURN};

    #[test]
    fn bars_are_scaled_and_labelled() {
        let bars = bar_data(FEATURE_LABELS, FEATURE_IMPORTANCE, 100.0);
        assert_eq!(bars.len(), 8);
        assert_eq!(bars[0], ("Account Balance", 24));
        assert_eq!(bars[7], ("Branch Visits", 5));
    }

    #[test]
    fn sparse_series_skip_missing_months() {
        let actual = sparse_line_points(ACTUAL_CHURN);
        assert_eq!(actual.len(), 11); // December has no actuals
        assert_eq!(actual[0], (0.0, 4.1));
        assert_eq!(actual.last(), Some(&(10.0, 4.8)));
    }

    #[test]
    fn bounds_cover_both_series() {
        let predicted = line_points(PREDICTED_CHURN);
        let actual = sparse_line_points(ACTUAL_CHURN);
        let [lo, hi] = y_bounds(&[&predicted, &actual]);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 6.0); // max is actual May at 5.4
    }
}
