//! Backward pass: per-node error signals and in-place delta-rule updates.

use crate::error::NetworkError;
use crate::layout::layout::LayerKind;
use crate::network::network::Network;

impl Network {
    /// Delta rule. For every connection `i` to the previous layer:
    /// `weight[i] += learning_rate * previous[i].output * error_signal`;
    /// the bias moves by `learning_rate * error_signal`.
    pub fn update_node_weights(&mut self, kind: LayerKind, index: usize, error_signal: f64) {
        let layer = *self.layout.layer(kind);
        let prev = match self.layout.previous(kind) {
            Some(prev) => *prev,
            None => return,
        };
        let rate = self.config.learning_rate;

        for i in 0..prev.node_count {
            let prev_output = self.arena.node(&prev, i).output();
            self.arena.node_mut(&layer, index).weights_mut()[i] +=
                rate * prev_output * error_signal;
        }

        let mut node = self.arena.node_mut(&layer, index);
        let bias = node.bias();
        node.set_bias(bias + rate * error_signal);
    }

    /// One backpropagation step for a single example, after `feed_forward`.
    ///
    /// Output-node error signals come first: target is 1 for the labeled
    /// node and 0 otherwise, the delta is scaled by the output activation's
    /// derivative. Each hidden node's signal is the sum of output signals
    /// weighted by the connection from that hidden node, scaled by the
    /// hidden activation's derivative.
    ///
    /// All signals for both layers are computed before any weight moves, so
    /// the hidden error sums read the exact weights that produced the
    /// forward pass. Updates are then applied output layer first.
    pub fn back_propagate(&mut self, target_class: usize) -> Result<(), NetworkError> {
        let output = *self.layout.layer(LayerKind::Output);
        let hidden = *self.layout.layer(LayerKind::Hidden);

        if target_class >= output.node_count {
            return Err(NetworkError::LabelOutOfRange {
                label: target_class,
                classes: output.node_count,
            });
        }

        let output_activation = self.config.output_activation;
        let hidden_activation = self.config.hidden_activation;

        let mut output_signals = vec![0.0; output.node_count];
        for o in 0..output.node_count {
            let out = self.arena.node(&output, o).output();
            let target = if o == target_class { 1.0 } else { 0.0 };
            let error_delta = target - out;
            output_signals[o] = error_delta * output_activation.derivative_from_output(out);
        }

        let mut hidden_signals = vec![0.0; hidden.node_count];
        for h in 0..hidden.node_count {
            let mut error_sum = 0.0;
            for o in 0..output.node_count {
                error_sum += output_signals[o] * self.arena.node(&output, o).weights()[h];
            }
            let out = self.arena.node(&hidden, h).output();
            hidden_signals[h] = error_sum * hidden_activation.derivative_from_output(out);
        }

        for (o, &signal) in output_signals.iter().enumerate() {
            self.update_node_weights(LayerKind::Output, o, signal);
        }
        for (h, &signal) in hidden_signals.iter().enumerate() {
            self.update_node_weights(LayerKind::Hidden, h, signal);
        }

        Ok(())
    }
}
