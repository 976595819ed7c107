//! Construction, addressing, forward-pass and classifier behavior.

use trilayer_nn::{
    Activation, ClassifierPolicy, LayerKind, Network, NetworkConfig, NetworkError,
};

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Builds a network with every hidden/output weight set to `weight` and
/// every bias set to `bias`, removing construction-time randomness.
fn pinned_network(
    input: usize,
    hidden: usize,
    output: usize,
    weight: f64,
    bias: f64,
    config: NetworkConfig,
) -> Network {
    let mut network = Network::with_config(input, hidden, output, config);
    for kind in [LayerKind::Hidden, LayerKind::Output] {
        let count = network.layout().layer(kind).node_count;
        for i in 0..count {
            let mut node = network.node_mut(kind, i);
            node.set_bias(bias);
            for w in node.weights_mut() {
                *w = weight;
            }
        }
    }
    network
}

#[test]
fn construction_matches_requested_counts() {
    let network = Network::new(784, 20, 10);
    let layout = network.layout();

    assert_eq!(layout.layer(LayerKind::Input).node_count, 784);
    assert_eq!(layout.layer(LayerKind::Hidden).node_count, 20);
    assert_eq!(layout.layer(LayerKind::Output).node_count, 10);
}

#[test]
fn weight_counts_follow_the_previous_layer() {
    let network = Network::new(784, 20, 10);

    assert_eq!(network.node(LayerKind::Input, 0).weight_count(), 0);
    for h in 0..20 {
        assert_eq!(network.node(LayerKind::Hidden, h).weight_count(), 784);
    }
    for o in 0..10 {
        assert_eq!(network.node(LayerKind::Output, o).weight_count(), 20);
    }
}

#[test]
fn randomization_spares_the_input_layer() {
    let network = Network::new(8, 4, 4);

    for i in 0..8 {
        let node = network.node(LayerKind::Input, i);
        assert_eq!(node.bias(), 0.0);
        assert_eq!(node.output(), 0.0);
    }
    // Hidden weights land in [-0.7, 0.7), alternating sign by connection.
    for h in 0..4 {
        let node = network.node(LayerKind::Hidden, h);
        for (i, &w) in node.weights().iter().enumerate() {
            assert!(w.abs() < 0.7, "weight {} out of range", w);
            if i % 2 == 1 {
                assert!(w <= 0.0, "odd-indexed weight {} should be non-positive", w);
            } else {
                assert!(w >= 0.0, "even-indexed weight {} should be non-negative", w);
            }
        }
    }
}

#[test]
fn feed_input_copies_values_verbatim() {
    let mut network = Network::new(4, 2, 2);
    let vector = [0.25, -1.5, 0.0, 42.0];

    network.feed_input(&vector).unwrap();

    for (i, &expected) in vector.iter().enumerate() {
        assert_eq!(network.node(LayerKind::Input, i).output(), expected);
    }
}

#[test]
fn feed_input_rejects_wrong_length() {
    let mut network = Network::new(4, 2, 2);

    let err = network.feed_input(&[1.0, 2.0]).unwrap_err();
    match err {
        NetworkError::DimensionMismatch { expected, actual } => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 2);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn forward_pass_matches_hand_computed_values() {
    let mut network = pinned_network(2, 2, 2, 0.5, 0.0, NetworkConfig::default());

    network.feed_input(&[1.0, 0.0]).unwrap();
    network.feed_forward();

    // Each hidden node: sigmoid(0.5 * 1 + 0.5 * 0) = sigmoid(0.5).
    let expected_hidden = sigmoid(0.5);
    for h in 0..2 {
        let out = network.node(LayerKind::Hidden, h).output();
        assert!((out - expected_hidden).abs() < 1e-12, "hidden output {}", out);
    }

    // Each output node: sigmoid(0.5 * h + 0.5 * h) = sigmoid(sigmoid(0.5)).
    let expected_output = sigmoid(expected_hidden);
    for o in 0..2 {
        let out = network.node(LayerKind::Output, o).output();
        assert!((out - expected_output).abs() < 1e-12, "output {}", out);
    }
}

#[test]
fn forward_pass_is_deterministic() {
    let mut network = Network::new(6, 4, 3);
    let input = [0.1, 0.9, 0.0, 1.0, 0.5, 0.3];

    network.feed_input(&input).unwrap();
    network.feed_forward();
    let first: Vec<u64> = (0..3)
        .map(|o| network.node(LayerKind::Output, o).output().to_bits())
        .collect();

    network.feed_input(&input).unwrap();
    network.feed_forward();
    let second: Vec<u64> = (0..3)
        .map(|o| network.node(LayerKind::Output, o).output().to_bits())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn activations_stay_inside_their_bounds() {
    let input = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

    let mut sigmoid_net = Network::new(6, 5, 4);
    sigmoid_net.feed_input(&input).unwrap();
    sigmoid_net.feed_forward();
    for h in 0..5 {
        let out = sigmoid_net.node(LayerKind::Hidden, h).output();
        assert!(out > 0.0 && out < 1.0, "sigmoid hidden output {}", out);
    }
    for o in 0..4 {
        let out = sigmoid_net.node(LayerKind::Output, o).output();
        assert!(out > 0.0 && out < 1.0, "sigmoid output {}", out);
    }

    let tanh_config = NetworkConfig {
        hidden_activation: Activation::Tanh,
        output_activation: Activation::Tanh,
        ..NetworkConfig::default()
    };
    let mut tanh_net = Network::with_config(6, 5, 4, tanh_config);
    tanh_net.feed_input(&input).unwrap();
    tanh_net.feed_forward();
    for h in 0..5 {
        let out = tanh_net.node(LayerKind::Hidden, h).output();
        assert!(out > -1.0 && out < 1.0, "tanh hidden output {}", out);
    }
    for o in 0..4 {
        let out = tanh_net.node(LayerKind::Output, o).output();
        assert!(out > -1.0 && out < 1.0, "tanh output {}", out);
    }
}

#[test]
fn delta_rule_updates_a_weight_exactly() {
    let rate = 0.2;
    let x = 0.75;
    let e = -0.4;
    let w = 0.3;

    let mut network = pinned_network(2, 2, 2, w, 0.1, NetworkConfig::default());
    network.feed_input(&[x, 0.0]).unwrap();

    network.update_node_weights(LayerKind::Hidden, 0, e);

    let node = network.node(LayerKind::Hidden, 0);
    assert_eq!(node.weights()[0], w + rate * x * e);
    assert_eq!(node.bias(), 0.1 + rate * e);
}

#[test]
fn classifier_picks_the_strict_maximum() {
    let mut network = Network::new(2, 2, 4);
    let outputs = [0.1, 0.7, 0.3, 0.2];
    for (i, &out) in outputs.iter().enumerate() {
        network.node_mut(LayerKind::Output, i).set_output(out);
    }

    assert_eq!(network.classify(), 1);
}

#[test]
fn classifier_zero_baseline_defaults_to_class_zero() {
    let mut network = Network::new(2, 2, 3);
    for (i, out) in [-0.5, -0.1, -0.9].into_iter().enumerate() {
        network.node_mut(LayerKind::Output, i).set_output(out);
    }

    // All outputs non-positive: the 0.0 baseline never gets beaten.
    assert_eq!(network.classify(), 0);
}

#[test]
fn classifier_argmax_policy_handles_negative_outputs() {
    let config = NetworkConfig {
        classifier: ClassifierPolicy::Argmax,
        ..NetworkConfig::default()
    };
    let mut network = Network::with_config(2, 2, 3, config);
    for (i, out) in [-0.5, -0.1, -0.9].into_iter().enumerate() {
        network.node_mut(LayerKind::Output, i).set_output(out);
    }

    assert_eq!(network.classify(), 1);
}

#[test]
fn back_propagate_rejects_out_of_range_label() {
    let mut network = Network::new(2, 2, 3);
    network.feed_input(&[0.5, 0.5]).unwrap();
    network.feed_forward();

    let err = network.back_propagate(3).unwrap_err();
    match err {
        NetworkError::LabelOutOfRange { label, classes } => {
            assert_eq!(label, 3);
            assert_eq!(classes, 3);
        }
        other => panic!("expected LabelOutOfRange, got {:?}", other),
    }
}
