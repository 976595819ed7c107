// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example tiny
//   cargo run --example mnist --release
fn main() {
    println!("trilayer-nn: a 3-layer feed-forward network stored in a single arena.");
    println!("Run `cargo run --example tiny` to see the synthetic 2-class demo.");
}
