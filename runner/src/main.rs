mod cli;
mod error;
mod generate;
mod report;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use route_coverage::prelude::*;
use route_coverage::{load_points_from_file, solve_each, Scenario};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use cli::{Cli, Command, SolveArgs};
use error::RunnerError;

fn main() -> ExitCode {
    let env = Env::default()
        .filter_or("ROUTE_LOG", "warn")
        .write_style("ROUTE_LOG_STYLE");
    env_logger::init_from_env(env);

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RunnerError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        Command::Solve(args) => solve(&args, &mut out)?,
        Command::Generate(args) => generate::write_random_points(&mut out, args.count, args.seed)?,
    }
    out.flush()?;
    Ok(())
}

fn solve(args: &SolveArgs, out: &mut impl Write) -> Result<(), RunnerError> {
    if let Some(&budget) = args.budgets.iter().find(|budget| !(**budget >= 0.0)) {
        return Err(RunnerError::InvalidBudget(budget));
    }
    let ratio = Ratio::new(args.ratio)?;

    let points = match &args.file {
        Some(path) => load_points_from_file(path)?,
        None => load_points(io::stdin().lock())?,
    };
    let table = DistanceTable::new(&points);
    info!("loaded {} points", points.len());

    let mut config = SearchConfig::default();
    if let Some(length) = args.max_length() {
        config = config.with_max_length(length);
    }

    let scenarios: Vec<Scenario> = if args.round_trip && args.naive {
        solve_each(&args.budgets, |budget| naive_round_trip(&table, budget))
    } else if args.round_trip {
        solve_each(&args.budgets, |budget| {
            round_trip(&table, budget, ratio).route()
        })
    } else if args.naive {
        solve_each(&args.budgets, |budget| {
            naive_search(&table, config.with_max_cost(budget))
        })
    } else {
        solve_budgets(&table, &args.budgets, config)
    };

    for scenario in &scenarios {
        report::write_scenario(out, &points, scenario)?;
    }
    Ok(())
}
