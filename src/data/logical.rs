use super::dataset::{DataItem, Dataset};
use crate::error::Result;

/// Two-input boolean gates, in the column order of [`truth_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Xor,
    Xnor,
    Or,
    And,
    Nor,
    Nand,
}

impl Gate {
    pub const ALL: [Gate; 6] = [Gate::Xor, Gate::Xnor, Gate::Or, Gate::And, Gate::Nor, Gate::Nand];

    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Gate::Xor => a ^ b,
            Gate::Xnor => !(a ^ b),
            Gate::Or => a | b,
            Gate::And => a & b,
            Gate::Nor => !(a | b),
            Gate::Nand => !(a & b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
            Gate::Or => "OR",
            Gate::And => "AND",
            Gate::Nor => "NOR",
            Gate::Nand => "NAND",
        }
    }
}

/// Rows `(0,0) (0,1) (1,0) (1,1)`, each targeting the given gates in order.
pub fn truth_table(gates: &[Gate]) -> Result<Dataset> {
    let mut items = Vec::with_capacity(4);
    for a in [false, true] {
        for b in [false, true] {
            let input = vec![f64::from(u8::from(a)), f64::from(u8::from(b))];
            let target = gates
                .iter()
                .map(|gate| f64::from(u8::from(gate.apply(a, b))))
                .collect();
            items.push(DataItem::new(input, target));
        }
    }
    Dataset::new(items)
}
