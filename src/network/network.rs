use log::debug;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid;
use crate::error::{check_len, NeuralError, Result};
use crate::network::shape::Shape;
use crate::random::RandomSource;

/// A fully-connected network with one sigmoid hidden layer and a sigmoid
/// output layer.
///
/// Weights are stored as flat row-major matrices:
/// - `weights_hidden[i * hidden_count + h]` connects input `i` to hidden `h`
/// - `weights_output[h * output_count + o]` connects hidden `h` to output `o`
///
/// Array lengths are fixed at construction; training only overwrites
/// individual elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NetworkParts")]
pub struct Network {
    #[serde(flatten)]
    shape: Shape,
    pub(crate) weights_hidden: Vec<f64>,
    pub(crate) biases_hidden: Vec<f64>,
    pub(crate) weights_output: Vec<f64>,
    pub(crate) biases_output: Vec<f64>,
}

/// Unvalidated form read from JSON.
#[derive(Deserialize)]
struct NetworkParts {
    input_count: usize,
    hidden_count: usize,
    output_count: usize,
    weights_hidden: Vec<f64>,
    biases_hidden: Vec<f64>,
    weights_output: Vec<f64>,
    biases_output: Vec<f64>,
}

impl TryFrom<NetworkParts> for Network {
    type Error = NeuralError;

    fn try_from(parts: NetworkParts) -> Result<Network> {
        let shape = Shape::new(parts.input_count, parts.hidden_count, parts.output_count)?;
        Network::from_parts(
            shape,
            parts.weights_hidden,
            parts.biases_hidden,
            parts.weights_output,
            parts.biases_output,
        )
    }
}

impl Network {
    /// Builds a network from existing parameters, checking every array
    /// length against `shape`.
    pub fn from_parts(
        shape: Shape,
        weights_hidden: Vec<f64>,
        biases_hidden: Vec<f64>,
        weights_output: Vec<f64>,
        biases_output: Vec<f64>,
    ) -> Result<Network> {
        check_len("weights_hidden", shape.hidden_weight_count(), weights_hidden.len())?;
        check_len("biases_hidden", shape.hidden(), biases_hidden.len())?;
        check_len("weights_output", shape.output_weight_count(), weights_output.len())?;
        check_len("biases_output", shape.outputs(), biases_output.len())?;

        Ok(Network {
            shape,
            weights_hidden,
            biases_hidden,
            weights_output,
            biases_output,
        })
    }

    /// Every weight is drawn as `rng.next_f64() - 0.5`, hidden weights first
    /// and then output weights, both in storage order. Biases start at zero.
    pub fn random<R>(shape: Shape, rng: &mut R) -> Network
    where
        R: RandomSource + ?Sized,
    {
        let weights_hidden = (0..shape.hidden_weight_count())
            .map(|_| rng.next_f64() - 0.5)
            .collect();
        let weights_output = (0..shape.output_weight_count())
            .map(|_| rng.next_f64() - 0.5)
            .collect();
        debug!("initialized {shape} network with random weights");

        Network {
            shape,
            weights_hidden,
            biases_hidden: vec![0.0; shape.hidden()],
            weights_output,
            biases_output: vec![0.0; shape.outputs()],
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn input_count(&self) -> usize {
        self.shape.inputs()
    }

    pub fn hidden_count(&self) -> usize {
        self.shape.hidden()
    }

    pub fn output_count(&self) -> usize {
        self.shape.outputs()
    }

    pub fn weights_hidden(&self) -> &[f64] {
        &self.weights_hidden
    }

    pub fn biases_hidden(&self) -> &[f64] {
        &self.biases_hidden
    }

    pub fn weights_output(&self) -> &[f64] {
        &self.weights_output
    }

    pub fn biases_output(&self) -> &[f64] {
        &self.biases_output
    }

    /// Forward pass into freshly allocated buffers.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut hidden = vec![0.0; self.hidden_count()];
        let mut output = vec![0.0; self.output_count()];
        self.predict_into(input, &mut hidden, &mut output)?;
        Ok(output)
    }

    /// Forward pass into caller-owned scratch buffers. On success `hidden`
    /// holds the hidden activations and `output` the prediction.
    pub fn predict_into(&self, input: &[f64], hidden: &mut [f64], output: &mut [f64]) -> Result<()> {
        check_len("input", self.input_count(), input.len())?;
        check_len("hidden scratch", self.hidden_count(), hidden.len())?;
        check_len("output scratch", self.output_count(), output.len())?;
        self.forward(input, hidden, output);
        Ok(())
    }

    /// Unchecked forward pass; all lengths must already match.
    pub(crate) fn forward(&self, input: &[f64], hidden: &mut [f64], output: &mut [f64]) {
        let hidden_count = self.hidden_count();
        let output_count = self.output_count();
        for (c, h) in hidden.iter_mut().enumerate() {
            let sum: f64 = input
                .iter()
                .enumerate()
                .map(|(r, x)| x * self.weights_hidden[r * hidden_count + c])
                .sum();
            *h = sigmoid(sum + self.biases_hidden[c]);
        }

        for (c, o) in output.iter_mut().enumerate() {
            let sum: f64 = hidden
                .iter()
                .enumerate()
                .map(|(r, h)| h * self.weights_output[r * output_count + c])
                .sum();
            *o = sigmoid(sum + self.biases_output[c]);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Network> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the network parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a network previously written by `save_json`. Array lengths are
    /// re-validated against the stored counts.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ParkMiller;

    fn fixed_network() -> Network {
        let shape = Shape::new(2, 2, 1).unwrap();
        Network::from_parts(
            shape,
            vec![0.5, -0.25, 0.75, 0.1],
            vec![0.0, 0.2],
            vec![1.5, -1.0],
            vec![0.3],
        )
        .unwrap()
    }

    #[test]
    fn predict_matches_hand_computation() {
        let network = fixed_network();
        let input = [1.0, 2.0];
        let h0 = sigmoid(1.0 * 0.5 + 2.0 * 0.75 + 0.0);
        let h1 = sigmoid(1.0 * -0.25 + 2.0 * 0.1 + 0.2);
        let expected = sigmoid(h0 * 1.5 + h1 * -1.0 + 0.3);

        let output = network.predict(&input).unwrap();
        assert_eq!(output.len(), 1);
        assert!((output[0] - expected).abs() < 1e-15);
    }

    #[test]
    fn predict_into_fills_hidden_scratch() {
        let network = fixed_network();
        let mut hidden = [9.0; 2];
        let mut output = [9.0; 1];
        network.predict_into(&[1.0, 2.0], &mut hidden, &mut output).unwrap();
        assert_eq!(hidden[0], sigmoid(2.0));
        assert_eq!(output.to_vec(), network.predict(&[1.0, 2.0]).unwrap());
    }

    #[test]
    fn predict_is_deterministic() {
        let network = Network::random(Shape::new(5, 4, 3).unwrap(), &mut ParkMiller::new());
        let input = [0.1, -0.4, 1.0, 0.0, 2.5];
        let a = network.predict(&input).unwrap();
        let b = network.predict(&input).unwrap();
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn outputs_lie_in_open_unit_interval() {
        let network = Network::random(Shape::new(3, 6, 4).unwrap(), &mut ParkMiller::with_seed(11));
        for input in [[0.0, 0.0, 0.0], [1.0, -1.0, 0.5], [3.0, 2.0, -4.0]] {
            let output = network.predict(&input).unwrap();
            assert_eq!(output.len(), 4);
            assert!(output.iter().all(|&y| y > 0.0 && y < 1.0));
        }
    }

    #[test]
    fn rejects_wrong_input_length() {
        let network = fixed_network();
        for input in [vec![1.0], vec![1.0, 2.0, 3.0]] {
            match network.predict(&input) {
                Err(NeuralError::ShapeMismatch { what: "input", expected: 2, actual }) => {
                    assert_eq!(actual, input.len());
                }
                other => panic!("expected shape mismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_wrong_scratch_length() {
        let network = fixed_network();
        let mut hidden = [0.0; 3];
        let mut output = [0.0; 1];
        let err = network.predict_into(&[0.0, 0.0], &mut hidden, &mut output).unwrap_err();
        assert!(matches!(err, NeuralError::ShapeMismatch { what: "hidden scratch", .. }));
    }

    #[test]
    fn random_initialization_layout() {
        let shape = Shape::new(2, 3, 2).unwrap();
        let network = Network::random(shape, &mut ParkMiller::new());
        assert_eq!(network.weights_hidden().len(), 6);
        assert_eq!(network.weights_output().len(), 6);
        assert!(network.biases_hidden().iter().all(|&b| b == 0.0));
        assert!(network.biases_output().iter().all(|&b| b == 0.0));
        assert!(network
            .weights_hidden()
            .iter()
            .chain(network.weights_output())
            .all(|&w| (-0.5..0.5).contains(&w)));
        assert_eq!(network.weights_hidden()[0], 16807.0 / 2147483647.0 - 0.5);
    }

    #[test]
    fn hidden_weights_are_drawn_before_output_weights() {
        let shape = Shape::new(2, 2, 1).unwrap();
        let network = Network::random(shape, &mut ParkMiller::new());
        let mut rng = ParkMiller::new();
        let draws: Vec<f64> = (0..6).map(|_| rng.next_f64() - 0.5).collect();
        assert_eq!(network.weights_hidden(), &draws[..4]);
        assert_eq!(network.weights_output(), &draws[4..]);
    }

    #[test]
    fn from_parts_rejects_bad_lengths() {
        let shape = Shape::new(2, 2, 1).unwrap();
        let err = Network::from_parts(shape, vec![0.0; 3], vec![0.0; 2], vec![0.0; 2], vec![0.0])
            .unwrap_err();
        assert!(matches!(
            err,
            NeuralError::ShapeMismatch { what: "weights_hidden", expected: 4, actual: 3 }
        ));
    }

    #[test]
    fn json_round_trip_preserves_parameters() {
        let network = Network::random(Shape::new(3, 2, 2).unwrap(), &mut ParkMiller::new());
        let json = network.to_json().unwrap();
        assert!(json.contains("\"weights_hidden\""));
        let restored = Network::from_json(&json).unwrap();
        assert_eq!(restored, network);
    }

    #[test]
    fn json_with_inconsistent_arrays_is_rejected() {
        let json = r#"{
            "input_count": 2, "hidden_count": 2, "output_count": 1,
            "weights_hidden": [0.1, 0.2, 0.3],
            "biases_hidden": [0.0, 0.0],
            "weights_output": [0.5, 0.5],
            "biases_output": [0.0]
        }"#;
        assert!(matches!(Network::from_json(json), Err(NeuralError::Json(_))));
    }

    #[test]
    fn json_with_overflowing_counts_is_rejected() {
        let json = format!(
            r#"{{
            "input_count": {}, "hidden_count": 4, "output_count": 1,
            "weights_hidden": [], "biases_hidden": [0.0, 0.0, 0.0, 0.0],
            "weights_output": [0.0, 0.0, 0.0, 0.0], "biases_output": [0.0]
        }}"#,
            usize::MAX / 2
        );
        match Network::from_json(&json) {
            Err(NeuralError::Json(e)) => assert!(e.to_string().contains("too large"), "{e}"),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn save_and_load_through_a_file() {
        let network = fixed_network();
        let path = std::env::temp_dir().join(format!("sigmoid-net-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        network.save_json(path).unwrap();
        let loaded = Network::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, network);
    }
}
