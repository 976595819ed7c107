/// MNIST digit classification demo.
///
/// Architecture: 784 → 20 (Sigmoid) → 10 (Sigmoid), per-example SGD, lr = 0.2.
///
/// Run with:
///   cargo run --example mnist --release
///
/// Data files must be present at demos/mnist_data/ (IDX binary format):
///   train-images-idx3-ubyte, train-labels-idx1-ubyte,
///   t10k-images-idx3-ubyte, t10k-labels-idx1-ubyte

use std::fs::File;
use std::io::BufWriter;
use std::process::exit;

use trilayer_nn::dataset::idx::load_idx_pair;
use trilayer_nn::{evaluate, train_loop, Network, NetworkError, TrainConfig};

const DATA_DIR: &str = "demos/mnist_data";
const CLASSES: usize = 10;
const HIDDEN_NODES: usize = 20;
const EPOCHS: usize = 3;

fn run() -> Result<(), NetworkError> {
    let (train_inputs, train_labels) = load_idx_pair(
        format!("{DATA_DIR}/train-images-idx3-ubyte"),
        format!("{DATA_DIR}/train-labels-idx1-ubyte"),
        CLASSES,
    )?;
    let (test_inputs, test_labels) = load_idx_pair(
        format!("{DATA_DIR}/t10k-images-idx3-ubyte"),
        format!("{DATA_DIR}/t10k-labels-idx1-ubyte"),
        CLASSES,
    )?;

    if train_inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    let pixels = train_inputs[0].len();
    let mut network = Network::new(pixels, HIDDEN_NODES, CLASSES);
    println!(
        "Training {} → {} → {} network ({} bytes of arena) on {} images",
        pixels,
        HIDDEN_NODES,
        CLASSES,
        network.layout().arena_bytes(),
        train_inputs.len()
    );

    let mut epochs = Vec::with_capacity(EPOCHS);
    for _ in 0..EPOCHS {
        let stats = train_loop(&mut network, &train_inputs, &train_labels, &TrainConfig::new(1))?;
        println!(
            "Epoch {}/{}: {} errors on {} images (accuracy {:.3}, {} ms)",
            epochs.len() + 1,
            EPOCHS,
            stats.errors,
            stats.samples,
            stats.accuracy,
            stats.elapsed_ms
        );
        epochs.push(stats);
    }

    let test_stats = evaluate(&mut network, &test_inputs, &test_labels)?;
    println!(
        "Test set: {} errors on {} images (accuracy {:.3})",
        test_stats.errors,
        test_stats.samples,
        test_stats.accuracy
    );

    // Leave a machine-readable record of the run next to the data.
    let report = serde_json::json!({
        "epochs": epochs,
        "test": test_stats,
    });
    let file = File::create(format!("{DATA_DIR}/report.json"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &report)
        .map_err(|e| NetworkError::Dataset(e.to_string()))?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("mnist demo failed: {}", err);
        exit(1);
    }
}
