use std::fmt;
use std::io;

/// Errors surfaced by network construction, the forward/backward engines and
/// the dataset reader.
///
/// Every fallible operation in the crate returns `Result<_, NetworkError>`
/// and propagates immediately; there is no retry logic anywhere. Silent
/// continuation after a dimension mismatch would push corrupted numeric
/// state through the rest of training.
#[derive(Debug)]
pub enum NetworkError {
    /// An input vector's length does not match the input layer's node count.
    DimensionMismatch { expected: usize, actual: usize },
    /// A target class label is not a valid output-node index.
    LabelOutOfRange { label: usize, classes: usize },
    /// A training or evaluation call received no samples.
    EmptyDataset,
    /// A dataset's inputs and labels differ in length.
    SampleCountMismatch { inputs: usize, labels: usize },
    /// An IDX file failed header or content validation.
    Dataset(String),
    Io(io::Error),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::DimensionMismatch { expected, actual } => write!(
                f,
                "input vector has {} values but the input layer has {} nodes",
                actual, expected
            ),
            NetworkError::LabelOutOfRange { label, classes } => write!(
                f,
                "target label {} is out of range for an output layer of {} nodes",
                label, classes
            ),
            NetworkError::EmptyDataset => write!(f, "dataset contains no samples"),
            NetworkError::SampleCountMismatch { inputs, labels } => write!(
                f,
                "dataset has {} input vectors but {} labels",
                inputs, labels
            ),
            NetworkError::Dataset(msg) => write!(f, "{}", msg),
            NetworkError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetworkError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for NetworkError {
    fn from(err: io::Error) -> Self {
        NetworkError::Io(err)
    }
}
