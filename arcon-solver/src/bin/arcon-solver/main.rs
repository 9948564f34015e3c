mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use arcon_solver::core::convert_case::Case;
use arcon_solver::core::statistics::configure_statistic_logging;
use arcon_solver::core::statistics::should_log_statistics;
use arcon_solver::core::VariableSelection;
use arcon_solver::problems::Einstein;
use arcon_solver::problems::NQueens;
use arcon_solver::problems::Problem;
use arcon_solver::problems::Sudoku;
use arcon_solver::problems::SAMPLE_CLUES;
use arcon_solver::SolverOptions;
use clap::Parser;
use clap::Subcommand;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::ArconResult;

/// The sizes of the N-queens boards in the default suite.
const DEFAULT_QUEENS: std::ops::RangeInclusive<usize> = 1..=10;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The problem to solve. Without a problem, the zebra puzzle, N-queens for n = 1 to 10, the
    /// empty Sudoku and a clued Sudoku are solved one after the other.
    #[command(subcommand)]
    problem: Option<ProblemCommand>,

    /// Enables logging of the solve progress.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,

    /// Instructs the solver to log its statistics after every problem.
    ///
    /// Every statistic is printed on its own line, prefixed by `%%%arcon-stat:`.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", global = true, verbatim_doc_comment)]
    log_statistics: bool,

    /// How the variable to branch on is selected.
    ///
    /// When absent, every problem uses its own default: Sudoku selects the smallest domain first,
    /// the other problems the largest domain first.
    #[arg(long, value_enum, global = true)]
    variable_selection: Option<VariableSelection>,
}

#[derive(Debug, Subcommand)]
enum ProblemCommand {
    /// The zebra puzzle: who owns the zebra?
    Einstein,
    /// Places `n` non-attacking queens on an `n × n` board.
    Queens { n: usize },
    /// Solves a Sudoku.
    ///
    /// The grid file lists the 81 cells row by row, with `1`-`9` for a clue and `.` or `0` for an
    /// empty cell. Without a file a hard sample puzzle is solved.
    Sudoku { path: Option<PathBuf> },
}

impl Args {
    /// The options of a problem whose own default is `default`.
    fn options(&self, default: SolverOptions) -> SolverOptions {
        self.variable_selection
            .map_or(default, |variable_selection| SolverOptions {
                variable_selection,
            })
    }
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%arcon-stat:",
            Some("%%%arcon-stat-end".to_owned()),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "% {}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> ArconResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if arcon_solver::core::asserts::ARCON_ASSERT_LEVEL_DEFINITION
        >= arcon_solver::core::asserts::ARCON_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Arcon assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            arcon_solver::core::asserts::ARCON_ASSERT_LEVEL_DEFINITION
        );
    };

    let default_options = args.options(SolverOptions::default());
    let sudoku_options = args.options(Sudoku::default_options());

    match &args.problem {
        Some(ProblemCommand::Einstein) => {
            solve_and_display(Einstein::with_options(default_options)?, &args)
        }
        Some(ProblemCommand::Queens { n }) => {
            solve_and_display(NQueens::with_options(*n, default_options)?, &args)
        }
        Some(ProblemCommand::Sudoku { path }) => {
            let clues = match path {
                Some(path) => Sudoku::parse_clues(&std::fs::read_to_string(path)?)?,
                None => SAMPLE_CLUES.to_vec(),
            };
            solve_and_display(Sudoku::with_options(clues, sudoku_options)?, &args)
        }
        None => {
            solve_and_display(Einstein::with_options(default_options)?, &args)?;
            for n in DEFAULT_QUEENS {
                solve_and_display(NQueens::with_options(n, default_options)?, &args)?;
            }
            solve_and_display(
                Sudoku::with_options(std::iter::empty(), sudoku_options)?,
                &args,
            )?;
            solve_and_display(Sudoku::with_options(SAMPLE_CLUES, sudoku_options)?, &args)
        }
    }
}

/// Solves `problem` and prints it together with the time the solve took.
fn solve_and_display(mut problem: impl Problem, args: &Args) -> ArconResult<()> {
    info!(
        "Solving {} with {}",
        problem.name(),
        problem.solver().options().variable_selection
    );

    let start = Instant::now();
    let _ = problem.solve()?;
    let elapsed = start.elapsed();

    print!("{problem}");
    println!("Time: {} ms", elapsed.as_millis());
    println!();

    if should_log_statistics() {
        problem.solver().log_statistics(args.verbose);
    }
    Ok(())
}
