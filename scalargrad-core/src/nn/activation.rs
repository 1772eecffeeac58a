use crate::error::ScalarGradError;
use crate::ops::{relu_op, sigmoid_op, tanh_op};
use crate::scalar::Scalar;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to a neuron's weighted sum.
///
/// Parsed from its lowercase name (`"tanh"`, `"relu"`, `"sigmoid"`). An unknown name is
/// an [`ScalarGradError::InvalidActivation`]; there is no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
}

impl Activation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
        }
    }

    /// Builds the activation node for `input`.
    pub fn apply(&self, input: &Scalar) -> Scalar {
        match self {
            Activation::Tanh => tanh_op(input),
            Activation::Relu => relu_op(input),
            Activation::Sigmoid => sigmoid_op(input),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            other => Err(ScalarGradError::InvalidActivation {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("tanh".parse::<Activation>().unwrap(), Activation::Tanh);
        assert_eq!("relu".parse::<Activation>().unwrap(), Activation::Relu);
        assert_eq!("sigmoid".parse::<Activation>().unwrap(), Activation::Sigmoid);
        for act in [Activation::Tanh, Activation::Relu, Activation::Sigmoid] {
            assert_eq!(act.to_string().parse::<Activation>().unwrap(), act);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for name in ["swish", "Tanh", "", " relu"] {
            let err = name.parse::<Activation>().unwrap_err();
            assert_eq!(err, ScalarGradError::InvalidActivation { name: name.to_string() });
        }
    }

    #[test]
    fn test_apply_builds_matching_node() {
        let x = Scalar::new(-0.5);
        assert_eq!(Activation::Tanh.apply(&x).op_name(), "Tanh");
        assert_eq!(Activation::Relu.apply(&x).value(), 0.0);
        assert_eq!(Activation::Sigmoid.apply(&x).op_name(), "Sigmoid");
    }
}
