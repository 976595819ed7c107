use trilayer_nn::{evaluate, train_loop, Network, TrainConfig};

fn main() {
    let mut network = Network::new(2, 2, 2);

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![1.0, 0.9],
        vec![0.8, 1.0],
    ];
    let labels = vec![0, 0, 1, 1];

    let before = evaluate(&mut network, &inputs, &labels).expect("evaluation failed");
    println!(
        "Untrained: {}/{} correct",
        before.samples - before.errors,
        before.samples
    );

    let config = TrainConfig::new(200);
    let last = train_loop(&mut network, &inputs, &labels, &config).expect("training failed");
    println!(
        "Epoch {}: {}/{} correct (accuracy {:.2})",
        last.epoch,
        last.samples - last.errors,
        last.samples,
        last.accuracy
    );

    for (input, label) in inputs.iter().zip(labels.iter()) {
        network.feed_input(input).expect("dimension mismatch");
        network.feed_forward();
        println!(
            "Input: {:?} -> class {} (label {})",
            input,
            network.classify(),
            label
        );
    }
}
