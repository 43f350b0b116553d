use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::Result;

/// Draws `number_samples` independent categories, all from the same weights.
pub fn sample_categorical<R: Rng + ?Sized>(
    rng: &mut R,
    prs: &[f64],
    number_samples: usize,
) -> Result<Vec<u32>> {
    let distribution = WeightedIndex::new(prs)?;
    let categories = (0..number_samples)
        .map(|_| distribution.sample(rng) as u32)
        .collect();

    Ok(categories)
}
