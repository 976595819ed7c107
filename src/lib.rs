pub mod activation;
pub mod arena;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::Activation;
pub use arena::arena::Arena;
pub use error::NetworkError;
pub use layout::layout::{LayerKind, LayerLayout, NetworkLayout};
pub use network::config::{ClassifierPolicy, NetworkConfig};
pub use network::network::Network;
pub use train::epoch_stats::EpochStats;
pub use train::loop_fn::{evaluate, train_loop};
pub use train::train_config::TrainConfig;
