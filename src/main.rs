//! Command-line entry point: run all eight policy/scope variants over the
//! name-generated workload and print each trace with its fault total.

use std::io::{self, BufRead};

use clap::Parser;

use swapsim::{run_all, workload_from_names, Error, Result, DEFAULT_FRAME_COUNT};

#[derive(Parser)]
#[command(name = "swapsim", about = "Page replacement policy simulator")]
struct Args {
    /// Number of physical frames shared by all processes.
    #[arg(long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Three full names (previous, current, next identity), each quoted.
    /// Read from stdin, one per line, when omitted.
    #[arg(num_args = 3, value_names = ["PREV", "CURRENT", "NEXT"])]
    names: Vec<String>,
}

fn read_names_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut names = Vec::with_capacity(3);

    for line in stdin.lock().lines().take(3) {
        names.push(line?);
    }

    if names.len() != 3 {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "expected three input lines",
        )));
    }
    Ok(names)
}

fn run(args: Args) -> Result<()> {
    if args.frames == 0 {
        return Err(Error::ZeroCapacity);
    }

    let names = if args.names.is_empty() {
        read_names_from_stdin()?
    } else {
        args.names
    };

    let workload = workload_from_names(&names[0], &names[1], &names[2])?;

    for report in run_all(&workload, args.frames)? {
        println!("{}", report);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
