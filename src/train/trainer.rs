use log::debug;

use crate::activation::sigmoid_derivative_from_output;
use crate::error::{check_len, NeuralError, Result};
use crate::network::{Network, Shape};
use crate::random::RandomSource;

/// Online backpropagation for a [`Network`].
///
/// The trainer owns the network and four scratch buffers sized once from its
/// shape. Every call to [`Trainer::train`] overwrites them, so after a step
/// they hold that step's activations and gradients.
#[derive(Debug, Clone)]
pub struct Trainer {
    network: Network,
    hidden: Vec<f64>,
    output: Vec<f64>,
    grad_hidden: Vec<f64>,
    grad_output: Vec<f64>,
}

impl Trainer {
    /// Builds a trainer around a fresh randomly initialized network.
    pub fn new<R>(shape: Shape, rng: &mut R) -> Trainer
    where
        R: RandomSource + ?Sized,
    {
        Trainer::from_network(Network::random(shape, rng))
    }

    /// Wraps an existing network with zero-filled scratch buffers.
    pub fn from_network(network: Network) -> Trainer {
        let hidden_count = network.hidden_count();
        let output_count = network.output_count();
        debug!("trainer attached to {} network", network.shape());

        Trainer {
            network,
            hidden: vec![0.0; hidden_count],
            output: vec![0.0; output_count],
            grad_hidden: vec![0.0; hidden_count],
            grad_output: vec![0.0; output_count],
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    /// Hidden activations from the last step.
    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }

    /// Output activations from the last step.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn grad_hidden(&self) -> &[f64] {
        &self.grad_hidden
    }

    pub fn grad_output(&self) -> &[f64] {
        &self.grad_output
    }

    /// One step of stochastic gradient descent on a single sample.
    ///
    /// Shapes and the learning rate are checked before anything is written,
    /// so a failed call leaves the network untouched.
    pub fn train(&mut self, input: &[f64], target: &[f64], lr: f64) -> Result<()> {
        check_len("input", self.network.input_count(), input.len())?;
        check_len("target", self.network.output_count(), target.len())?;
        if !(lr.is_finite() && lr > 0.0) {
            return Err(NeuralError::InvalidLearningRate(lr));
        }

        self.network.forward(input, &mut self.hidden, &mut self.output);

        for ((grad, &y), &t) in self.grad_output.iter_mut().zip(&self.output).zip(target) {
            *grad = (y - t) * sigmoid_derivative_from_output(y);
        }

        // Hidden gradients read the output weights before they are updated.
        let output_count = self.output.len();
        for (r, grad) in self.grad_hidden.iter_mut().enumerate() {
            let row = &self.network.weights_output[r * output_count..(r + 1) * output_count];
            let sum: f64 = self.grad_output.iter().zip(row).map(|(g, w)| g * w).sum();
            *grad = sum * sigmoid_derivative_from_output(self.hidden[r]);
        }

        for (r, &h) in self.hidden.iter().enumerate() {
            let row = &mut self.network.weights_output[r * output_count..(r + 1) * output_count];
            for (w, &g) in row.iter_mut().zip(&self.grad_output) {
                *w -= lr * g * h;
            }
        }

        let hidden_count = self.hidden.len();
        for (r, &x) in input.iter().enumerate() {
            let row = &mut self.network.weights_hidden[r * hidden_count..(r + 1) * hidden_count];
            for (w, &g) in row.iter_mut().zip(&self.grad_hidden) {
                *w -= lr * g * x;
            }
        }

        for (b, &g) in self.network.biases_output.iter_mut().zip(&self.grad_output) {
            *b -= lr * g;
        }

        for (b, &g) in self.network.biases_hidden.iter_mut().zip(&self.grad_hidden) {
            *b -= lr * g;
        }

        Ok(())
    }
}
