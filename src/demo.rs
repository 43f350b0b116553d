use std::io::Write;

use candle_core::Device;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::Args;
use crate::error::Result;
use crate::probability_vector::ProbabilityVector;
use crate::variables::{CategoricalVariable, DeterministicVariable};

/// What the demo printed, in print order.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub samples: Vec<u32>,
    pub probabilities: Vec<f64>,
    pub prob: Vec<f64>,
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<DemoReport> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let device = Device::Cpu;

    let prob = ProbabilityVector::random(args.dim, &mut rng, &device)?;
    let parameter = DeterministicVariable::new("prob", prob.tensor().clone());
    let mut k = CategoricalVariable::new("k", parameter)?;

    let samples = k.get_sample(args.num_samples, &mut rng)?;
    let probabilities = k.calculate_log_probability(&samples)?.exp()?;

    let report = DemoReport {
        samples: samples.to_vec1::<u32>()?,
        probabilities: probabilities.to_vec1::<f64>()?,
        prob: prob.to_vec()?,
    };
    tracing::info!(
        dim = args.dim,
        num_samples = args.num_samples,
        seed = ?args.seed,
        "categorical sampler demo finished"
    );

    writeln!(out, "samples: {:?}", report.samples)?;
    writeln!(out, "probabilities: {:?}", report.probabilities)?;
    writeln!(out, "prob: {:?}", report.prob)?;

    Ok(report)
}
