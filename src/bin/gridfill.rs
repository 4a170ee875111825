use std::fs;
use std::fs::File;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use gridfill::{words, Grid, Solver};
use log::info;

fn main() -> Result<(), gridfill::Error> {
    env_logger::init();

    let matches = Command::new("gridfill")
        .arg(
            Arg::new("structure")
                .short('s')
                .long("structure")
                .value_name("FILE")
                .help("Grid structure file: '*' cells are blocked, spaces are open")
                .required(true),
        )
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .value_name("FILE")
                .help("Candidate word list, one word per line")
                .required(true),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("CELLS")
                .requires("height")
                .help("Grid width. Required if the structure is not a square"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("CELLS")
                .requires("width")
                .help("Grid height. Required if the structure is not a square"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the filled grid here instead of stdout"),
        )
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .action(ArgAction::SetTrue)
                .help("Write flamegraph.svg for the solve"),
        )
        .get_matches();

    let structure = matches
        .get_one::<String>("structure")
        .expect("structure not included");
    let structure = fs::read_to_string(structure)?;

    let grid = match (
        matches.get_one::<String>("width"),
        matches.get_one::<String>("height"),
    ) {
        (Some(width), Some(height)) => {
            let width = width.parse().expect("failed to parse width");
            let height = height.parse().expect("failed to parse height");
            Grid::rectangle(structure, width, height)?
        }
        _ => Grid::square(structure)?,
    };

    let candidates = words::load_words(
        matches
            .get_one::<String>("words")
            .expect("words not included"),
    )?;

    let guard = if matches.get_flag("profile") {
        Some(pprof::ProfilerGuard::new(100).expect("failed to start profiler"))
    } else {
        None
    };

    let mut solver = Solver::new(&grid, &candidates);
    info!(
        "{} slots, {} candidate words",
        solver.slots().len(),
        candidates.len()
    );

    let now = Instant::now();
    let solution = solver.solve();
    info!("search finished in {}ms", now.elapsed().as_millis());

    if let Some(guard) = guard {
        if let Ok(report) = guard.report().build() {
            let file = File::create("flamegraph.svg")?;
            report
                .flamegraph(file)
                .expect("failed to write flamegraph");
        }
    }

    match solution {
        Some(assignment) => {
            let filled = solver.render(&grid, &assignment);
            match matches.get_one::<String>("output") {
                Some(path) => fs::write(path, filled.to_string())?,
                None => println!("{}", filled),
            }
        }
        None => println!("No solution."),
    }

    Ok(())
}
