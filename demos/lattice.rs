use clap::Parser;
use num_bigint::BigUint;

use colset_rs::combination::ColumnCombination;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Upper bound of the family, e.g. "{0, 1, 2, 3, 4, 6}".
    #[arg(value_name = "SET")]
    superset: ColumnCombination,

    /// Lower bound of the family, e.g. "{2}".
    #[arg(value_name = "SET")]
    base: ColumnCombination,

    /// Size of the generated combinations.
    #[arg(value_name = "INT")]
    n: usize,

    /// Print at most this many combinations.
    #[clap(long, value_name = "INT", default_value = "50")]
    limit: usize,

    /// Enable debug logging.
    #[clap(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let time_total = std::time::Instant::now();

    let strategy = args.superset.superset_strategy(&args.base, args.n);
    let count = args.superset.count_n_subsets_superset_of(&args.base, args.n);
    println!("strategy = {}", strategy);
    println!("family size = {}", count);

    let mut shown: usize = 0;
    for cc in args.superset.n_subsets_superset_of(&args.base, args.n).take(args.limit) {
        println!("  {}", cc);
        shown += 1;
    }
    if count > BigUint::from(shown) {
        println!("  ... ({} shown)", shown);
    }

    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
