mod args;
mod error;

use args::Args;
use clap::Parser;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use solve4x_compute::solver::{Outcome, Solver};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Parses and solves the given input.
fn solve(args: &Args, input: &str) -> Result<Outcome, Error> {
    let solver = Solver::new(input, args.options(input))?;
    Ok(solver.run())
}

/// Prints each step of the outcome: its explanation, then the whole value after the step.
fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Solved(solution) if solution.steps.is_empty() => {
            println!("{} is already solved.", solution.current());
        },
        Outcome::Solved(solution) => {
            for step in &solution.steps {
                print!("{}", step.explanation);
                println!("  {}", step.result);
            }
        },
        Outcome::Unsolved { .. } => println!("no solution found"),
    }
}

/// Solves one line of input, printing the outcome or the error. Returns true on success.
fn run_line(args: &Args, input: &str) -> bool {
    match solve(args, input) {
        Ok(outcome) => {
            print_outcome(&outcome);
            true
        },
        Err(err) => {
            err.report_to_stderr(input);
            false
        },
    }
}

/// Solves each non-empty line read from stdin.
fn run_stdin(args: &Args) -> Result<bool, Error> {
    let mut ok = true;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if !input.is_empty() {
            ok &= run_line(args, input);
        }
    }
    Ok(ok)
}

/// Runs the interactive prompt until end of input.
fn run_repl(args: &Args) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, args: &Args) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run_line(args, input.trim());
        Ok(())
    }

    loop {
        match process_line(&mut rl, args) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let ok = if let Some(input) = &args.input {
        run_line(&args, input)
    } else if !io::stdin().is_terminal() {
        match run_stdin(&args) {
            Ok(ok) => ok,
            Err(err) => {
                err.report_to_stderr("");
                false
            },
        }
    } else {
        match run_repl(&args) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{}", err);
                false
            },
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
