//! Display Formatting
//!
//! Pure helpers that reformat fetched values for display. Domain values are
//! never recomputed here: accuracy fractions are scaled to percentages,
//! byte counts divided down to megabytes, integer counts grouped.

use crate::api::types::PredictionResult;

/// Render an accuracy fraction in [0, 1] as a percentage with two decimals
pub fn accuracy_percentage(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Render a byte count in megabytes with two decimals
pub fn size_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1_000_000.0)
}

/// Render a training time in minutes with two decimals
pub fn execution_minutes(minutes: f64) -> String {
    format!("{:.2}", minutes)
}

/// Group an integer with comma thousands separators
pub fn thousands(n: u64) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*digit);
    }
    out
}

/// Headline for a prediction: the label plus the backend-scaled accuracy,
/// displayed verbatim
pub fn prediction_headline(result: &PredictionResult) -> String {
    format!("{} ({}%)", result.prediction_label, result.accuracy)
}

/// Tone classes for the prediction headline, keyed off toxicity
pub fn prediction_tone(poisonous: bool) -> &'static str {
    if poisonous {
        "text-red-400"
    } else {
        "text-green-400"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_percentage() {
        assert_eq!(accuracy_percentage(0.978), "97.80%");
        assert_eq!(accuracy_percentage(0.9), "90.00%");
        assert_eq!(accuracy_percentage(0.0), "0.00%");
        assert_eq!(accuracy_percentage(1.0), "100.00%");
    }

    #[test]
    fn test_size_mb() {
        assert_eq!(size_mb(45_000_000), "45.00");
        assert_eq!(size_mb(2_500_000), "2.50");
        assert_eq!(size_mb(0), "0.00");
    }

    #[test]
    fn test_execution_minutes() {
        assert_eq!(execution_minutes(42.5), "42.50");
        assert_eq!(execution_minutes(0.1), "0.10");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(11_000_000), "11,000,000");
        assert_eq!(thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_prediction_headline() {
        let result = PredictionResult {
            prediction_label: "Amanita".to_string(),
            accuracy: 88.2,
            poisonous: true,
        };
        assert_eq!(prediction_headline(&result), "Amanita (88.2%)");
    }

    #[test]
    fn test_prediction_tone_is_exclusive() {
        assert_ne!(prediction_tone(true), prediction_tone(false));
        assert!(prediction_tone(true).contains("red"));
        assert!(prediction_tone(false).contains("green"));
    }
}
