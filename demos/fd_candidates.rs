//! Naive functional dependency discovery over a small in-memory relation.
//!
//! For every right-hand side column `A`, left-hand sides are tried level by
//! level as the size-`k` subsets of the remaining columns; a candidate that
//! contains an already found left-hand side is skipped.

use std::collections::HashMap;

use clap::Parser;
use log::{debug, info};

use colset_rs::combination::ColumnCombination;
use colset_rs::named::RelationSchema;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Largest left-hand side to consider.
    #[clap(long, value_name = "INT", default_value = "3")]
    max_lhs: usize,
}

const ROWS: &[[&str; 5]] = &[
    ["1", "Ada", "Lovelace", "London", "N1"],
    ["2", "Alan", "Turing", "London", "N2"],
    ["3", "Ada", "Byron", "Paris", "P1"],
    ["4", "Grace", "Hopper", "Paris", "P1"],
    ["5", "Alan", "Kay", "Boston", "B1"],
];

fn holds(lhs: &ColumnCombination, rhs: usize) -> bool {
    let mut seen: HashMap<Vec<&str>, &str> = HashMap::new();
    ROWS.iter().all(|row| {
        let key: Vec<&str> = lhs.columns().map(|c| row[c]).collect();
        *seen.entry(key).or_insert(row[rhs]) == row[rhs]
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let schema = RelationSchema::new("people", ["id", "first", "last", "city", "zip"]);
    let all = schema.all_columns();
    let empty = ColumnCombination::new();

    let mut total = 0;
    for rhs in 0..schema.dimension() {
        let mut rhs_cc = ColumnCombination::new();
        rhs_cc.add_column(rhs);
        let rest = all.minus(&rhs_cc);

        let mut found: Vec<ColumnCombination> = Vec::new();
        for k in 1..=args.max_lhs.min(rest.size()) {
            info!("rhs = {}, level {}: {} candidates", schema.columns()[rhs], k, rest.count_n_subsets_superset_of(&empty, k));
            for lhs in rest.n_subsets_superset_of(&empty, k) {
                if found.iter().any(|f| lhs.contains_subset(f)) {
                    debug!("skip {}", lhs);
                    continue;
                }
                if holds(&lhs, rhs) {
                    println!("{} -> {}", schema.to_named(&lhs), schema.to_named(&rhs_cc));
                    found.push(lhs);
                }
            }
        }
        total += found.len();
    }
    println!("Found {} minimal functional dependencies", total);

    Ok(())
}
