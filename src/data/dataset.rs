use crate::error::{check_len, NeuralError, Result};
use crate::network::Shape;
use crate::random::{shuffle, RandomSource};

/// One training sample.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl DataItem {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> DataItem {
        DataItem { input, target }
    }
}

/// A non-empty list of samples that all share one input width and one
/// target width.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    items: Vec<DataItem>,
    input_width: usize,
    target_width: usize,
}

impl Dataset {
    pub fn new(items: Vec<DataItem>) -> Result<Dataset> {
        let first = items.first().ok_or(NeuralError::EmptyDataset)?;
        let input_width = first.input.len();
        let target_width = first.target.len();
        for item in &items {
            check_len("input", input_width, item.input.len())?;
            check_len("target", target_width, item.target.len())?;
        }
        Ok(Dataset { items, input_width, target_width })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn items(&self) -> &[DataItem] {
        &self.items
    }

    /// Reorders the samples in place with [`shuffle`]. Items are never
    /// handed out mutably, so their widths stay as validated.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        shuffle(&mut self.items, rng);
    }

    /// Fails unless samples fit a network of the given shape.
    pub fn check_shape(&self, shape: Shape) -> Result<()> {
        check_len("input", shape.inputs(), self.input_width)?;
        check_len("target", shape.outputs(), self.target_width)
    }
}
