use serde::{Serialize, Deserialize};
use crate::activation::activation::Activation;

/// Learning rate used when none is configured. Tuned for sigmoid layers;
/// tanh layers usually want a much smaller value (around 0.004).
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// How `Network::classify` seeds its running maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierPolicy {
    /// The running maximum starts at 0.0, so an output layer whose values
    /// are all non-positive reports class 0. Harmless with sigmoid outputs
    /// (always positive) but a real bias with tanh outputs; kept as the
    /// default because it is the historical behavior.
    ZeroBaseline,
    /// True argmax: the first node seeds the maximum, later nodes must
    /// strictly exceed it.
    Argmax,
}

/// Construction-time configuration for a `Network`.
///
/// Fields:
/// - `hidden_activation` — activation applied to hidden-layer sums
/// - `output_activation` — activation applied to output-layer sums
/// - `learning_rate`     — factor by which weight corrections are applied
/// - `classifier`        — see `ClassifierPolicy`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub hidden_activation: Activation,
    pub output_activation: Activation,
    pub learning_rate: f64,
    pub classifier: ClassifierPolicy,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            hidden_activation: Activation::Sigmoid,
            output_activation: Activation::Sigmoid,
            learning_rate: DEFAULT_LEARNING_RATE,
            classifier: ClassifierPolicy::ZeroBaseline,
        }
    }
}
