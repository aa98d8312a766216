use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Finds routes that cover the most points within a budget.",
    long_about = None
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a route for every budget and print the results
    Solve(SolveArgs),
    /// Print a random input with the given number of points
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// File with the number of points followed by one "x y" line per point. Reads stdin if absent.
    pub file: Option<PathBuf>,

    /// Cost budget. Repeat for several scenarios.
    #[clap(
        short,
        long = "budget",
        allow_negative_numbers = true,
        default_values_t = [29.0, 45.0, 77.0, 150.0]
    )]
    pub budgets: Vec<f64>,

    /// Exact number of points in the route. Negative values leave the length open.
    #[clap(short, long, allow_negative_numbers = true, conflicts_with = "round_trip")]
    pub length: Option<i64>,

    /// Search a round trip back to the first point instead of a one-way route
    #[clap(long)]
    pub round_trip: bool,

    /// Share of the budget for the way out of a round trip
    #[clap(short, long, default_value_t = 0.5)]
    pub ratio: f64,

    /// Use the exhaustive search. Only feasible for a few dozen points, and for round trips it
    /// ignores the ratio.
    #[clap(long)]
    pub naive: bool,
}

impl SolveArgs {
    /// The exact route length, if one was requested
    pub fn max_length(&self) -> Option<usize> {
        self.length.and_then(|length| usize::try_from(length).ok())
    }
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Number of points, including the first and the last one
    pub count: usize,

    /// Seed for a reproducible output
    #[clap(short, long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_defaults() {
        let cli = Cli::parse_from(["route-coverage", "solve", "points.txt"]);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.budgets, [29.0, 45.0, 77.0, 150.0]);
        assert_eq!(args.file, Some(PathBuf::from("points.txt")));
        assert_eq!(args.max_length(), None);
        assert!(!args.round_trip);
    }

    #[test]
    fn negative_length_is_open() {
        let cli = Cli::parse_from(["route-coverage", "solve", "-l", "-1", "-b", "10", "-b", "20"]);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.max_length(), None);
        assert_eq!(args.budgets, [10.0, 20.0]);
        assert_eq!(args.file, None);

        let cli = Cli::parse_from(["route-coverage", "solve", "--length", "4"]);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.max_length(), Some(4));
    }

    #[test]
    fn length_conflicts_with_round_trip() {
        let result = Cli::try_parse_from(["route-coverage", "solve", "-l", "4", "--round-trip"]);
        assert!(result.is_err());
    }

    #[test]
    fn naive_round_trip() {
        let cli = Cli::parse_from(["route-coverage", "solve", "--naive", "--round-trip"]);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert!(args.naive && args.round_trip);
        assert_eq!(args.ratio, 0.5);
    }
}
