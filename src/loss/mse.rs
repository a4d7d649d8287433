/// Squared-error measurements. Training always uses the squared-error
/// gradient built into [`crate::train::Trainer`]; these are for reporting.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        Self::sum_squared(predicted, expected) / n
    }

    /// Σ (predicted - expected)²
    pub fn sum_squared(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }
}
