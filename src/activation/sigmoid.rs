/// Logistic function `1 / (1 + e^-x)`. Range is (0, 1) for finite `x`,
/// although large magnitudes saturate to exactly 0.0 or 1.0 in f64.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its *output*.
///
/// `y` must already be a sigmoid activation, not the pre-activation sum:
/// `d/dx sigmoid(x) = sigmoid(x) * (1 - sigmoid(x)) = y * (1 - y)`.
pub fn sigmoid_derivative_from_output(y: f64) -> f64 {
    y * (1.0 - y)
}
