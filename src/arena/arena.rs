//! The single allocation holding every node record of a network.
//!
//! A node record is `NODE_HEADER` cells (bias, output) followed by that
//! layer's weight cells. Records are addressed by offsets computed from a
//! `LayerLayout`; no node or layer is individually allocated, freed or
//! reallocated after construction.

use crate::layout::layout::{LayerLayout, NODE_HEADER};

const BIAS: usize = 0;
const OUTPUT: usize = 1;

/// One contiguous, fixed-length buffer of `f64` cells.
///
/// The arena is allocated once, zero-filled, and owned exclusively by a
/// single `Network` for its whole lifetime. Only bias, output and weight
/// cells mutate afterwards.
pub struct Arena {
    cells: Vec<f64>,
}

impl Arena {
    /// Allocates a zeroed arena of `len` cells.
    pub fn new(len: usize) -> Arena {
        Arena { cells: vec![0.0; len] }
    }

    /// Arena length in cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only view of the node record at `index` within `layer`.
    pub fn node(&self, layer: &LayerLayout, index: usize) -> NodeRef<'_> {
        let start = layer.node_offset(index);
        NodeRef { cells: &self.cells[start..start + layer.node_stride] }
    }

    /// Mutable view of the node record at `index` within `layer`.
    pub fn node_mut(&mut self, layer: &LayerLayout, index: usize) -> NodeMut<'_> {
        let start = layer.node_offset(index);
        NodeMut { cells: &mut self.cells[start..start + layer.node_stride] }
    }
}

/// Read-only view of one node record.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    cells: &'a [f64],
}

impl<'a> NodeRef<'a> {
    pub fn bias(&self) -> f64 {
        self.cells[BIAS]
    }

    /// The node's current output, as written by the last forward pass (or
    /// by `feed_input` for input nodes).
    pub fn output(&self) -> f64 {
        self.cells[OUTPUT]
    }

    /// Weights to the previous layer, one per upstream node. Empty for
    /// input nodes.
    pub fn weights(&self) -> &'a [f64] {
        &self.cells[NODE_HEADER..]
    }

    pub fn weight_count(&self) -> usize {
        self.cells.len() - NODE_HEADER
    }
}

/// Mutable view of one node record.
pub struct NodeMut<'a> {
    cells: &'a mut [f64],
}

impl<'a> NodeMut<'a> {
    pub fn bias(&self) -> f64 {
        self.cells[BIAS]
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.cells[BIAS] = bias;
    }

    pub fn output(&self) -> f64 {
        self.cells[OUTPUT]
    }

    pub fn set_output(&mut self, output: f64) {
        self.cells[OUTPUT] = output;
    }

    pub fn weights(&self) -> &[f64] {
        &self.cells[NODE_HEADER..]
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.cells[NODE_HEADER..]
    }

    pub fn weight_count(&self) -> usize {
        self.cells.len() - NODE_HEADER
    }
}
