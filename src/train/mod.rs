pub mod epoch_stats;
pub mod loop_fn;
pub mod train_config;
