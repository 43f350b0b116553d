use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of categories
    #[arg(long, default_value_t = 10)]
    pub dim: usize,

    /// Number of draws from the categorical variable
    #[arg(long, default_value_t = 5)]
    pub num_samples: usize,

    /// Seed for reproducible runs; entropy-seeded when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long)]
    pub verbose: bool,
}
