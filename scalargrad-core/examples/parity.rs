// Trains a 3 -> [4, 4, 1] network on 3-bit parity and saves it as JSON.
//
//     RUST_LOG=info cargo run --example parity -- [seed] [output.json]

use rand::SeedableRng;
use rand::rngs::StdRng;
use scalargrad_core::model::DEFAULT_MODEL_PATH;
use scalargrad_core::{Mlp, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut rng = match args.next() {
        Some(seed) => {
            let seed = seed.parse::<u64>().map_err(|e| {
                ScalarGradError::InvalidConfiguration(format!("invalid seed '{}': {}", seed, e))
            })?;
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let path = args.next().unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

    let xs = vec![
        vec![0.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ];
    let ys = [0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0];

    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    let report = mlp.train(&xs, &ys, 0.02, 1000, "tanh")?;
    println!("final loss {:.6}", report.final_loss);

    for (x, expected) in [
        ([1.0, 0.0, 0.0], 1),
        ([1.0, 1.0, 0.0], 0),
        ([1.0, 0.0, 1.0], 0),
        ([0.0, 1.0, 1.0], 0),
    ] {
        let out = mlp.predict(&x, "tanh")?;
        println!("{:?} -> {:.6} expected {}", x, out[0].value(), expected);
    }

    mlp.save(&path)?;
    println!("model written to {}", path);
    Ok(())
}
