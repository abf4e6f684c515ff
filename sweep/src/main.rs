use std::time::Instant;

use clap::{Parser, ValueEnum};
use stockham2d::{
    DEFAULT_BLOCK_SIZE, Fft2d, Fft2dConfig, StockhamPlan, TwiddleStrategy,
    signal::{round_trip, two_tone_grid},
};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Round-trip the 2D Stockham FFT over power-of-two sizes", long_about = None)]
struct Cli {
    #[arg(long, value_name = "N", default_value_t = 2)]
    min_size: usize,
    #[arg(long, value_name = "N", default_value_t = 16384)]
    max_size: usize,
    #[arg(long, value_enum, default_value_t = Strategy::Cached)]
    strategy: Strategy,
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
    #[arg(long, value_name = "ERROR", default_value_t = 1e-14)]
    tolerance: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Computed,
    Cached,
}

impl From<Strategy> for TwiddleStrategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::Computed => TwiddleStrategy::Computed,
            Strategy::Cached => TwiddleStrategy::Cached,
        }
    }
}

/// Powers of two from `min_size` to `max_size`, both inclusive.
fn sweep_sizes(min_size: usize, max_size: usize) -> Result<Vec<usize>, String> {
    if !min_size.is_power_of_two() || !max_size.is_power_of_two() {
        return Err(format!("sizes must be powers of two, got {min_size}..={max_size}"));
    }
    if min_size > max_size {
        return Err(format!("min size {min_size} is larger than max size {max_size}"));
    }

    let first = min_size.trailing_zeros();
    let last = max_size.trailing_zeros();
    Ok((first..=last).map(|shift| 1 << shift).collect())
}

fn main() {
    let cli = Cli::parse();

    let sizes = match sweep_sizes(cli.min_size, cli.max_size) {
        Ok(sizes) => sizes,
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    };

    let config = Fft2dConfig::default()
        .with_strategy(cli.strategy.into())
        .with_block_size(cli.block_size);

    println!(
        "Strategy: {:?}, block size: {}, tolerance: {:e}",
        cli.strategy, cli.block_size, cli.tolerance
    );

    let mut failed = false;
    for n in sizes {
        let start = Instant::now();
        let result = Fft2d::new(n, config).and_then(|fft| {
            let grid = two_tone_grid(n)?;
            round_trip(&fft, &grid)
        });

        let result = match result {
            Ok(result) => result,
            Err(error) => {
                eprintln!("N={n}: {error}");
                std::process::exit(1);
            }
        };

        let passes = StockhamPlan::new(n).map(|plan| plan.passes()).unwrap_or(0);
        let status = if result.max_error < cli.tolerance {
            "ok"
        } else {
            failed = true;
            "FAILED"
        };

        println!(
            "N={n}: {passes} passes per axis, {} total, max error {:e} ({status}, {:.3} s)",
            result.forward_passes + result.inverse_passes,
            result.max_error,
            start.elapsed().as_secs_f64()
        );
    }

    if failed {
        std::process::exit(1);
    }
}
