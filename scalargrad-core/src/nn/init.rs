use crate::nn::parameter::Parameter;
use rand::Rng;

/// Creates `len` parameters drawn independently and uniformly from `[0, 1)`.
///
/// The random source is supplied by the caller so initialization is reproducible
/// with a seeded generator.
pub fn uniform<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<Parameter> {
    (0..len).map(|_| Parameter::new(rng.gen::<f64>())).collect()
}

/// Creates a single parameter initialized to 0.
pub fn zero() -> Parameter {
    Parameter::new(0.0)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
