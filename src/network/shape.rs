use serde::Serialize;

use crate::error::{NeuralError, Result};

/// Unit counts of the three layers. All counts are positive and both
/// weight matrix sizes fit in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    #[serde(rename = "input_count")]
    inputs: usize,
    #[serde(rename = "hidden_count")]
    hidden: usize,
    #[serde(rename = "output_count")]
    outputs: usize,
}

impl Shape {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Result<Shape> {
        if inputs == 0 {
            return Err(NeuralError::EmptyLayer("input"));
        }
        if hidden == 0 {
            return Err(NeuralError::EmptyLayer("hidden"));
        }
        if outputs == 0 {
            return Err(NeuralError::EmptyLayer("output"));
        }
        if inputs.checked_mul(hidden).is_none() {
            return Err(NeuralError::LayerTooLarge { from: inputs, to: hidden });
        }
        if hidden.checked_mul(outputs).is_none() {
            return Err(NeuralError::LayerTooLarge { from: hidden, to: outputs });
        }
        Ok(Shape { inputs, hidden, outputs })
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// Length of the input→hidden weight array.
    pub fn hidden_weight_count(&self) -> usize {
        self.inputs * self.hidden
    }

    /// Length of the hidden→output weight array.
    pub fn output_weight_count(&self) -> usize {
        self.hidden * self.outputs
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.inputs, self.hidden, self.outputs)
    }
}
