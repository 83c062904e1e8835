//! Integration tests training full networks end to end and round-tripping
//! them through the JSON persistence format.

use ffnet::prelude::*;
use ffnet::FeedForwardNetwork as Network;

const TOLERANCE: f64 = 1e-9;

fn floats_close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

const XOR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const XOR_OUTPUTS: [[f64; 1]; 4] = [[0.0], [1.0], [1.0], [0.0]];

fn xor_network() -> Network {
    Network::new(
        2,
        &[2],
        1,
        NetworkOptions::new()
            .seed(820_312.0)
            .hidden_activation(Activation::Logistic)
            .output_activation(Activation::Logistic),
    )
}

fn xor_examples() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = XOR_INPUTS.iter().map(|i| i.to_vec()).collect();
    let outputs = XOR_OUTPUTS.iter().map(|o| o.to_vec()).collect();
    (inputs, outputs)
}

#[test]
fn test_batch_training_learns_xor() {
    let mut network = xor_network();
    let (inputs, outputs) = xor_examples();

    let config = BatchTrainingConfig::new()
        .max_iterations(50_000)
        .error_threshold(0.005);
    let report = network
        .train_batch(&inputs, &outputs, &config)
        .expect("Batch training should succeed");

    assert!(
        report.error <= 0.005,
        "XOR should converge below the threshold, got error {} after {} iterations",
        report.error,
        report.iterations
    );
    assert!(report.iterations <= 50_000);

    for (input, expected) in XOR_INPUTS.iter().zip(XOR_OUTPUTS.iter()) {
        let output = network.predict(input).expect("Prediction should succeed");
        assert!(
            (output[0] - expected[0]).abs() < 0.5,
            "XOR({:?}) rounded the wrong way: {}",
            input,
            output[0]
        );
    }
}

#[test]
fn test_online_training_reduces_error() {
    let mut network = xor_network();

    let mut first_pass = 0.0;
    let mut last_pass = 0.0;
    for round in 0..5_000 {
        let mut error_sum = 0.0;
        for (input, expected) in XOR_INPUTS.iter().zip(XOR_OUTPUTS.iter()) {
            error_sum += network
                .train(input, expected)
                .expect("Training should succeed");
        }
        if round == 0 {
            first_pass = error_sum;
        }
        last_pass = error_sum;
    }

    assert!(
        last_pass < first_pass,
        "Error should shrink over training: first={}, last={}",
        first_pass,
        last_pass
    );
}

#[test]
fn test_trained_network_survives_json_roundtrip() {
    let mut network = xor_network();
    let (inputs, outputs) = xor_examples();

    let config = BatchTrainingConfig::new()
        .max_iterations(2_000)
        .error_threshold(0.005);
    network
        .train_batch(&inputs, &outputs, &config)
        .expect("Batch training should succeed");

    let json = network.to_json().expect("Serialization should succeed");
    let mut restored = Network::from_json(&json).expect("Restore should succeed");

    for input in XOR_INPUTS.iter() {
        let expected = network.predict(input).expect("Prediction should succeed");
        let actual = restored.predict(input).expect("Prediction should succeed");
        for (expected_value, actual_value) in expected.iter().zip(actual.iter()) {
            assert!(
                floats_close(*expected_value, *actual_value, TOLERANCE),
                "Mismatch after restore: original={}, restored={}",
                expected_value,
                actual_value
            );
        }
    }
}

#[test]
fn test_restored_network_keeps_learning() {
    let mut network = xor_network();
    let (inputs, outputs) = xor_examples();

    let warmup = BatchTrainingConfig::new()
        .max_iterations(500)
        .error_threshold(0.0);
    let warmup_report = network
        .train_batch(&inputs, &outputs, &warmup)
        .expect("Batch training should succeed");

    let json = network.to_json().expect("Serialization should succeed");
    let mut restored = Network::from_json(&json).expect("Restore should succeed");

    let followup = BatchTrainingConfig::new()
        .max_iterations(50_000)
        .error_threshold(0.005);
    let followup_report = restored
        .train_batch(&inputs, &outputs, &followup)
        .expect("Batch training should succeed");

    assert!(
        followup_report.error <= warmup_report.error,
        "Restored network should pick up where training left off: before={}, after={}",
        warmup_report.error,
        followup_report.error
    );
}

#[test]
fn test_identical_seeds_train_identically() {
    let options = NetworkOptions::new()
        .seed(42.0)
        .hidden_activation(Activation::Logistic)
        .output_activation(Activation::Logistic);
    let mut first = Network::new(2, &[2], 1, options.clone());
    let mut second = Network::new(2, &[2], 1, options);
    let (inputs, outputs) = xor_examples();

    let config = BatchTrainingConfig::new()
        .max_iterations(100)
        .error_threshold(0.0);
    let first_report = first
        .train_batch(&inputs, &outputs, &config)
        .expect("Batch training should succeed");
    let second_report = second
        .train_batch(&inputs, &outputs, &config)
        .expect("Batch training should succeed");

    assert_eq!(first_report.error, second_report.error);
    assert_eq!(first_report.iterations, second_report.iterations);
    for input in XOR_INPUTS.iter() {
        assert_eq!(
            first.predict(input).expect("Prediction should succeed"),
            second.predict(input).expect("Prediction should succeed")
        );
    }
}

#[test]
fn test_mismatched_batch_is_rejected_whole() {
    let mut network = xor_network();
    let baseline = network.to_json().expect("Serialization should succeed");

    let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0, 2.0]];
    let outputs = vec![vec![0.0], vec![1.0]];
    let config = BatchTrainingConfig::new().max_iterations(10);

    let result = network.train_batch(&inputs, &outputs, &config);
    assert!(matches!(result, Err(NetworkError::SizeMismatch { .. })));

    // a rejected batch must not have touched any weight
    let after = network.to_json().expect("Serialization should succeed");
    assert_eq!(baseline, after);
}
