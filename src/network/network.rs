use rand::prelude::*;

use crate::activation::activation::Activation;
use crate::arena::arena::{Arena, NodeMut, NodeRef};
use crate::error::NetworkError;
use crate::layout::layout::{LayerKind, NetworkLayout};
use crate::network::config::{ClassifierPolicy, NetworkConfig};

/// A three-layer feed-forward network resident in a single arena.
///
/// The layout table is computed once by the constructor and never changes;
/// the arena is allocated once and never grows. Forward and backward passes
/// mutate node outputs, weights and biases in place.
pub struct Network {
    pub(crate) layout: NetworkLayout,
    pub(crate) arena: Arena,
    pub(crate) config: NetworkConfig,
}

impl Network {
    /// Builds a network with default configuration (sigmoid activations,
    /// learning rate 0.2) and randomized hidden/output parameters.
    pub fn new(input_count: usize, hidden_count: usize, output_count: usize) -> Network {
        Network::with_config(input_count, hidden_count, output_count, NetworkConfig::default())
    }

    /// Builds a network with an explicit configuration.
    ///
    /// The arena starts zeroed (all biases, outputs and weights at 0.0),
    /// then the hidden and output layers are randomized. Input nodes carry
    /// no trainable parameters and are never randomized.
    pub fn with_config(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        config: NetworkConfig,
    ) -> Network {
        let layout = NetworkLayout::new(input_count, hidden_count, output_count);
        let arena = Arena::new(layout.arena_len());

        let mut network = Network { layout, arena, config };
        network.randomize_layer(LayerKind::Hidden);
        network.randomize_layer(LayerKind::Output);
        network
    }

    /// Draws each weight from [0, 0.7), negating every other connection, and
    /// each bias from [0, 1), negating every other node, so roughly half of
    /// the parameters start negative.
    fn randomize_layer(&mut self, kind: LayerKind) {
        let layer = *self.layout.layer(kind);
        let mut rng = rand::thread_rng();

        for n in 0..layer.node_count {
            let mut node = self.arena.node_mut(&layer, n);

            for (i, weight) in node.weights_mut().iter_mut().enumerate() {
                let mut value = 0.7 * rng.gen::<f64>();
                if i % 2 == 1 {
                    value = -value;
                }
                *weight = value;
            }

            let mut bias = rng.gen::<f64>();
            if n % 2 == 1 {
                bias = -bias;
            }
            node.set_bias(bias);
        }
    }

    pub fn layout(&self) -> &NetworkLayout {
        &self.layout
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.config.learning_rate = learning_rate;
    }

    /// Read-only view of one node record.
    pub fn node(&self, kind: LayerKind, index: usize) -> NodeRef<'_> {
        self.arena.node(self.layout.layer(kind), index)
    }

    /// Mutable view of one node record. Exposed so callers (and tests) can
    /// pin weights and biases to known values.
    pub fn node_mut(&mut self, kind: LayerKind, index: usize) -> NodeMut<'_> {
        let layer = *self.layout.layer(kind);
        self.arena.node_mut(&layer, index)
    }

    pub(crate) fn activation_for(&self, kind: LayerKind) -> Activation {
        if kind == LayerKind::Hidden {
            self.config.hidden_activation
        } else {
            self.config.output_activation
        }
    }

    /// Copies `vector` straight into the input layer's node outputs, one
    /// value per node, with no transformation.
    pub fn feed_input(&mut self, vector: &[f64]) -> Result<(), NetworkError> {
        let input = *self.layout.layer(LayerKind::Input);
        if vector.len() != input.node_count {
            return Err(NetworkError::DimensionMismatch {
                expected: input.node_count,
                actual: vector.len(),
            });
        }

        for (i, &value) in vector.iter().enumerate() {
            self.arena.node_mut(&input, i).set_output(value);
        }
        Ok(())
    }

    /// Index of the output node with the highest output after a forward
    /// pass. Scans in node order with a strictly-greater comparison; how the
    /// running maximum is seeded depends on the configured
    /// `ClassifierPolicy`.
    pub fn classify(&self) -> usize {
        let output = self.layout.layer(LayerKind::Output);

        let mut max_out = match self.config.classifier {
            ClassifierPolicy::ZeroBaseline => 0.0,
            ClassifierPolicy::Argmax => f64::NEG_INFINITY,
        };
        let mut max_index = 0;

        for i in 0..output.node_count {
            let out = self.arena.node(output, i).output();
            if out > max_out {
                max_out = out;
                max_index = i;
            }
        }

        max_index
    }
}
