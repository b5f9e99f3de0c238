use anyhow::Result;
use benchmarking::cli::{parse_command, Command};
use benchmarking::{generate_corpus, run_benchmarks};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

fn main() -> Result<()> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let (params, seed) = match parse_command(std::env::args_os()) {
        Command::Run { params, seed } => (params, seed),
        Command::Usage { text, is_error } => {
            if is_error {
                eprintln!("{text}");
            } else {
                println!("{text}");
            }
            return Ok(());
        }
        Command::Fatal(err) => return Err(err.into()),
    };

    params.validate()?;

    let seed = seed.unwrap_or_else(rand::random);
    log::info!(
        "Generating {} random vectors of size {} (seed {seed})",
        params.num_vectors,
        params.cardinality
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let corpus = generate_corpus(&params, &mut rng);

    let start = Instant::now();
    run_benchmarks(&params, &corpus)?;
    log::info!("Finished in {} s", start.elapsed().as_secs_f64());

    Ok(())
}
