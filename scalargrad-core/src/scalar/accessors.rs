use super::Scalar;

impl Scalar {
    /// The forward-computed value of this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the value. Used by optimizers on parameter leaves; changing the value of
    /// an interior node does not recompute anything downstream.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// The gradient accumulated by the most recent backward pass(es).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Name of the operation that produced this node (`"Leaf"` for leaves and constants).
    pub fn op_name(&self) -> &'static str {
        self.read_data().op.name()
    }

    /// Returns `true` if the node has no operands and no backward rule.
    pub fn is_leaf(&self) -> bool {
        self.read_data().op.inputs().is_empty()
    }

    /// Handles to the nodes this one was computed from, in operand order.
    pub fn operands(&self) -> Vec<Scalar> {
        self.read_data()
            .op
            .inputs()
            .into_iter()
            .cloned()
            .collect()
    }
}
