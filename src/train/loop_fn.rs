use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of per-example SGD and
/// returns the stats of the **last completed epoch**.
///
/// Each example is fed in, fed forward, back-propagated against its label,
/// and classified; the epoch's error count is the number of examples whose
/// classification missed the label. Examples are visited in dataset order,
/// so a run with fixed initial weights is reproducible.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// If no epoch completes at all (the stop flag was already set, or
/// `config.epochs` is 0), the returned stats are a sentinel with
/// `epoch: 0` and zero samples, errors and accuracy.
///
/// # Errors
/// `EmptyDataset` or `SampleCountMismatch` before any work happens;
/// `DimensionMismatch` or `LabelOutOfRange` from the first offending example.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
    config: &TrainConfig,
) -> Result<EpochStats, NetworkError> {
    validate_dataset(inputs, labels)?;

    let mut last = EpochStats::new(0, config.epochs, 0, 0, 0);

    for epoch in 1..=config.epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();
        let errors = run_pass(network, inputs, labels, true)?;

        let stats = EpochStats::new(
            epoch,
            config.epochs,
            inputs.len(),
            errors,
            t_start.elapsed().as_millis() as u64,
        );
        last = stats.clone();

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    Ok(last)
}

/// Runs one forward-only pass over a dataset without touching any weight
/// and returns its stats.
pub fn evaluate(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
) -> Result<EpochStats, NetworkError> {
    validate_dataset(inputs, labels)?;

    let t_start = Instant::now();
    let errors = run_pass(network, inputs, labels, false)?;

    Ok(EpochStats::new(
        1,
        1,
        inputs.len(),
        errors,
        t_start.elapsed().as_millis() as u64,
    ))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn validate_dataset(inputs: &[Vec<f64>], labels: &[usize]) -> Result<(), NetworkError> {
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    if inputs.len() != labels.len() {
        return Err(NetworkError::SampleCountMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    Ok(())
}

/// One pass over the dataset; returns the misclassification count.
fn run_pass(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
    update_weights: bool,
) -> Result<usize, NetworkError> {
    let mut errors = 0;

    for (input, &label) in inputs.iter().zip(labels.iter()) {
        network.feed_input(input)?;
        network.feed_forward();

        if update_weights {
            network.back_propagate(label)?;
        }

        if network.classify() != label {
            errors += 1;
        }
    }

    Ok(errors)
}
