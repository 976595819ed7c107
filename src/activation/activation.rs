use serde::{Serialize, Deserialize};

/// Activation applied to a node's weighted sum; chosen per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Logistic sigmoid, `1 / (1 + e^-x)`; outputs in (0, 1).
    Sigmoid,
    /// Hyperbolic tangent; outputs in (-1, 1).
    Tanh,
}

impl Activation {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }

    /// Derivative used by backpropagation, evaluated from a node's stored
    /// post-activation output rather than its pre-activation sum.
    pub fn derivative_from_output(&self, output: f64) -> f64 {
        match self {
            Activation::Sigmoid => output * (1.0 - output),
            Activation::Tanh => 1.0 - output.tanh().powi(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Probe points stay well below f64 saturation: sigmoid rounds to exactly
    // 1.0 near x = 37 and tanh to ±1.0 near |x| = 19, at which point the
    // open-interval bound no longer holds for the stored value.
    #[test]
    fn sigmoid_is_bounded_and_centered() {
        for x in [-5.0, -1.0, 0.0, 1.0, 5.0] {
            let y = Activation::Sigmoid.function(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {} escaped (0, 1)", x, y);
        }
        assert!((Activation::Sigmoid.function(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn tanh_is_bounded_and_odd() {
        for x in [-5.0, -0.5, 0.0, 0.5, 5.0] {
            let y = Activation::Tanh.function(x);
            assert!(y > -1.0 && y < 1.0, "tanh({}) = {} escaped (-1, 1)", x, y);
        }
        let pos = Activation::Tanh.function(0.7);
        let neg = Activation::Tanh.function(-0.7);
        assert!((pos + neg).abs() < 1e-15);
    }

    #[test]
    fn sigmoid_derivative_uses_activated_output() {
        let y = Activation::Sigmoid.function(0.3);
        let d = Activation::Sigmoid.derivative_from_output(y);
        assert!((d - y * (1.0 - y)).abs() < 1e-15);
    }
}
