//! Forward pass: weighted sums and activations, layer by layer.

use crate::layout::layout::LayerKind;
use crate::network::network::Network;

impl Network {
    /// Sets the node's output to its bias plus the dot product of the
    /// previous layer's outputs with the node's weights. Input nodes have no
    /// upstream layer and are left untouched.
    pub fn calc_node_output(&mut self, kind: LayerKind, index: usize) {
        let layer = *self.layout.layer(kind);
        let prev = match self.layout.previous(kind) {
            Some(prev) => *prev,
            None => return,
        };

        let node = self.arena.node(&layer, index);
        let weights = node.weights();
        let mut sum = node.bias();
        for i in 0..prev.node_count {
            sum += self.arena.node(&prev, i).output() * weights[i];
        }

        self.arena.node_mut(&layer, index).set_output(sum);
    }

    /// Applies the layer's configured activation to the node's current
    /// output, in place.
    pub fn activate_node(&mut self, kind: LayerKind, index: usize) {
        let layer = *self.layout.layer(kind);
        let activation = self.activation_for(kind);

        let mut node = self.arena.node_mut(&layer, index);
        let activated = activation.function(node.output());
        node.set_output(activated);
    }

    /// Computes and activates every node of one layer, in node order.
    pub fn calc_layer(&mut self, kind: LayerKind) {
        let node_count = self.layout.layer(kind).node_count;
        for i in 0..node_count {
            self.calc_node_output(kind, i);
            self.activate_node(kind, i);
        }
    }

    /// Feeds the input layer's values forward through the hidden layer and
    /// then the output layer. The hidden layer is fully computed and
    /// activated before any output node reads it.
    pub fn feed_forward(&mut self) {
        self.calc_layer(LayerKind::Hidden);
        self.calc_layer(LayerKind::Output);
    }
}
