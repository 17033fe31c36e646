use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lcg_lanes::{advance_lanes, advance_state, high_bits, seed, A, C, LANES};

/// Times scalar versus 8-lane LCG iteration and prints the high 16 bits
/// of every resulting state.
#[derive(Parser)]
#[command(
    name = "lcg-lanes",
    about = "Benchmark scalar vs 8-lane LCG state updates"
)]
struct Args {
    /// Recurrence steps to apply per lane.
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: u64,

    /// Scalar seed, broadcast to every lane.
    #[arg(long, default_value_t = 0, conflicts_with = "seed_hex")]
    seed: u32,

    /// 64 hex digits: 32 seed bytes, read as 8 little-endian u32 words,
    /// lane 0 first.
    #[arg(long)]
    seed_hex: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seeds = match &args.seed_hex {
        Some(hex) => seed::parse_seed_hex(hex).context("bad --seed-hex")?,
        None => seed::lanes_from_scalar(args.seed),
    };

    println!(
        "A = {:#x}, C = {:#x}, {} lanes, {} steps per lane",
        A, C, LANES, args.iterations
    );

    let start = Instant::now();
    let mut scalar_out = [0u32; LANES];
    for (out, &s) in scalar_out.iter_mut().zip(seeds.iter()) {
        *out = advance_state(s, A, C, args.iterations);
    }
    let scalar_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let lane_out = advance_lanes(seeds, A, C, args.iterations);
    let lane_secs = start.elapsed().as_secs_f64();

    report("scalar", scalar_secs, &scalar_out);
    report("lanes ", lane_secs, &lane_out);

    Ok(())
}

/// One line per run: elapsed seconds, then the high-bits projection of
/// each lane in lane order.
fn report(label: &str, secs: f64, states: &[u32; LANES]) {
    print!("{}: {:.9} s  high bits:", label, secs);
    for &state in states {
        print!(" {:04x}", high_bits(state));
    }
    println!();
}
