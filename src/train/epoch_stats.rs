use serde::{Serialize, Deserialize};

/// Per-epoch statistics emitted by `train_loop` and returned by `evaluate`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Examples processed in this epoch.
    pub samples: usize,
    /// Examples whose classification did not match their label.
    pub errors: usize,
    /// Fraction of examples classified correctly, in [0, 1]; 0.0 when no
    /// examples ran.
    pub accuracy: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// Builds the stats for one pass, deriving `accuracy` from the error
    /// count so serialized stats carry it too.
    pub fn new(
        epoch: usize,
        total_epochs: usize,
        samples: usize,
        errors: usize,
        elapsed_ms: u64,
    ) -> EpochStats {
        let accuracy = if samples == 0 {
            0.0
        } else {
            (samples - errors) as f64 / samples as f64
        };
        EpochStats { epoch, total_epochs, samples, errors, accuracy, elapsed_ms }
    }
}
