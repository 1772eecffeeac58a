use crate::scalar::Scalar;
use std::fmt;

/// The operation that produced a node, together with the operands it consumed.
///
/// Every non-leaf node stores one of these variants. The variant is both the
/// record of *how* the node was computed (for inspection) and the local
/// derivative rule used during the backward pass.
#[derive(Clone)]
pub enum Op {
    /// A leaf: an input, a trained parameter or a wrapped constant.
    Leaf,
    Add(Scalar, Scalar),
    Mul(Scalar, Scalar),
    /// `base ^ exponent`; the exponent is a plain number and is not differentiated.
    Pow(Scalar, f64),
    Tanh(Scalar),
    Relu(Scalar),
    Sigmoid(Scalar),
}

impl Op {
    /// Short name of the operation, used in `Debug` output and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "Leaf",
            Op::Add(..) => "Add",
            Op::Mul(..) => "Mul",
            Op::Pow(..) => "Pow",
            Op::Tanh(_) => "Tanh",
            Op::Relu(_) => "Relu",
            Op::Sigmoid(_) => "Sigmoid",
        }
    }

    /// Returns the operands that participated in the forward computation.
    ///
    /// The order **must** match the order of gradients returned by [`Op::backward`].
    pub fn inputs(&self) -> Vec<&Scalar> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Tanh(a) | Op::Relu(a) | Op::Sigmoid(a) => vec![a],
        }
    }

    /// Consumes the op and hands back its operand handles.
    pub(crate) fn into_operands(self) -> Vec<Scalar> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Tanh(a) | Op::Relu(a) | Op::Sigmoid(a) => vec![a],
        }
    }

    /// Computes the contribution of this operation's output gradient to each input.
    ///
    /// `grad_output` is dL/dOutput and `output_value` is the forward value of the
    /// node that owns this op. Returns dL/dInput_i for every input, in the order of
    /// [`Op::inputs`]. The caller is responsible for *adding* these contributions
    /// into the inputs' gradients.
    pub fn backward(&self, grad_output: f64, output_value: f64) -> Vec<f64> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(_, _) => vec![grad_output, grad_output],
            Op::Mul(a, b) => vec![b.value() * grad_output, a.value() * grad_output],
            Op::Pow(a, k) => vec![k * a.value().powf(k - 1.0) * grad_output],
            Op::Tanh(_) => vec![(1.0 - output_value * output_value) * grad_output],
            // Boundary at exactly 0 takes the positive branch, matching the forward pass.
            Op::Relu(a) => {
                let local = if a.value() >= 0.0 { 1.0 } else { 0.0 };
                vec![local * grad_output]
            }
            Op::Sigmoid(_) => vec![output_value * (1.0 - output_value) * grad_output],
        }
    }
}

impl fmt::Debug for Op {
    // Operands are summarised by value only; printing them fully would walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow(a, k) => write!(f, "Pow({}, {})", a.value(), k),
            other => {
                let values: Vec<f64> = other.inputs().iter().map(|s| s.value()).collect();
                write!(f, "{}{:?}", other.name(), values)
            }
        }
    }
}
