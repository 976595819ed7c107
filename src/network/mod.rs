pub mod config;
pub mod network;
pub mod forward;
pub mod backprop;
