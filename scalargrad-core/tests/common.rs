use scalargrad_core::model::{LayerState, MlpState, NeuronState};

/// Installs `env_logger` once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every 3-bit input with its parity bit as target.
#[allow(dead_code)]
pub fn parity_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = (0..8u32)
        .map(|n| (0..3).rev().map(|bit| ((n >> bit) & 1) as f64).collect())
        .collect();
    let targets = vec![0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    (inputs, targets)
}

/// A reproducible starting point: weights cycle through `((i * 67 + 5) % 100) / 100` in
/// layer, neuron, weight order; biases are 0.
#[allow(dead_code)]
pub fn deterministic_state(n_inputs: usize, layer_sizes: &[usize]) -> MlpState {
    let mut counter = 0usize;
    let mut fan_in = n_inputs;
    let mut layers = Vec::with_capacity(layer_sizes.len());
    for &size in layer_sizes {
        let neurons = (0..size)
            .map(|_| NeuronState {
                weights: (0..fan_in)
                    .map(|_| {
                        let w = ((counter * 67 + 5) % 100) as f64 / 100.0;
                        counter += 1;
                        w
                    })
                    .collect(),
                bias: 0.0,
            })
            .collect();
        layers.push(LayerState { neurons });
        fan_in = size;
    }
    MlpState { n_inputs, layers }
}
