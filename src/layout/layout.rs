use serde::{Serialize, Deserialize};

/// Identifies one of the three layers of a network, in arena order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// Cells occupied by a node record's fixed header (bias, then output),
/// preceding its weights.
pub const NODE_HEADER: usize = 2;

/// Shape and position of one layer's region within the arena.
///
/// Every node in a layer has the same weight count, so records within a layer
/// share a single stride and the node at `index` starts at
/// `offset + index * node_stride`. Strides differ *across* layers: input
/// nodes carry no weights, hidden nodes carry one weight per input node and
/// output nodes one weight per hidden node.
///
/// All fields are fixed when the layout is computed and never change for the
/// lifetime of the network that stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerLayout {
    /// Number of nodes in this layer.
    pub node_count: usize,
    /// Weights per node; equal for every node in the layer.
    pub weight_count: usize,
    /// Cells per node record: `NODE_HEADER + weight_count`.
    pub node_stride: usize,
    /// Cell index of this layer's first record within the arena.
    pub offset: usize,
}

impl LayerLayout {
    fn new(offset: usize, node_count: usize, weight_count: usize) -> LayerLayout {
        LayerLayout {
            node_count,
            weight_count,
            node_stride: NODE_HEADER + weight_count,
            offset,
        }
    }

    /// Total cells occupied by this layer's region.
    pub fn len(&self) -> usize {
        self.node_count * self.node_stride
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Cell index of the node record at `index`.
    pub fn node_offset(&self, index: usize) -> usize {
        debug_assert!(
            index < self.node_count,
            "node index {} out of range for a layer of {} nodes",
            index,
            self.node_count
        );
        self.offset + index * self.node_stride
    }
}

/// The size table of a whole network: three `LayerLayout`s laid out
/// consecutively (input, hidden, output) in one arena.
///
/// Computed exactly once at construction and stored immutably on the
/// `Network`; every later addressing operation trusts these stored values
/// instead of recomputing them. Recomputing with different effective counts
/// would desynchronize addressing from the allocated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLayout {
    input: LayerLayout,
    hidden: LayerLayout,
    output: LayerLayout,
}

impl NetworkLayout {
    /// Computes the layout for the given node counts. Hidden nodes get one
    /// weight per input node, output nodes one weight per hidden node.
    pub fn new(input_count: usize, hidden_count: usize, output_count: usize) -> NetworkLayout {
        let input = LayerLayout::new(0, input_count, 0);
        let hidden = LayerLayout::new(input.len(), hidden_count, input_count);
        let output = LayerLayout::new(input.len() + hidden.len(), output_count, hidden_count);

        NetworkLayout { input, hidden, output }
    }

    pub fn layer(&self, kind: LayerKind) -> &LayerLayout {
        match kind {
            LayerKind::Input => &self.input,
            LayerKind::Hidden => &self.hidden,
            LayerKind::Output => &self.output,
        }
    }

    /// The upstream layer whose outputs feed `kind`; the input layer has
    /// none.
    pub fn previous(&self, kind: LayerKind) -> Option<&LayerLayout> {
        match kind {
            LayerKind::Input => None,
            LayerKind::Hidden => Some(&self.input),
            LayerKind::Output => Some(&self.hidden),
        }
    }

    /// Total arena length in cells.
    pub fn arena_len(&self) -> usize {
        self.input.len() + self.hidden.len() + self.output.len()
    }

    /// Total arena size in bytes.
    pub fn arena_bytes(&self) -> usize {
        self.arena_len() * std::mem::size_of::<f64>()
    }
}
