// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::error::Error;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::debug;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_search::config::{Config, Strategy};
use sokoban_search::{Level, LoadLevel, Outcome, Solve, SolverOk};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("Martin Taibr <taibr.martin@gmail.com>")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sokoban levels using uninformed and heuristic search")
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("bfs, dfs, astar, ucs or greedy - can be repeated (default: all)"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .help("largest depth limit for dfs (default: 100)"),
        )
        .arg(
            Arg::with_name("max-expanded")
                .long("max-expanded")
                .takes_value(true)
                .help("abort after expanding this many states"),
        )
        .arg(
            Arg::with_name("no-prune")
                .long("no-prune")
                .help("don't prune pushes into corners"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the board after every move"),
        )
        .arg(
            Arg::with_name("level")
                .required(true)
                .multiple(true)
                .help("level files in XSB format"),
        )
        .get_matches();

    // everything is validated before solving anything
    let (strategies, config) = parse_config(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    let levels = load_levels(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    let include_steps = matches.is_present("steps");

    let mut results = Vec::new();
    for (level_path, level) in &levels {
        for &strategy in &strategies {
            let config = Config { strategy, ..config };
            println!("Solving {} using {}...", level_path, strategy);
            let solution = level.solve(&config);
            print_solution(level, &solution, include_steps);
            results.push((level_path.as_str(), solution));
        }
    }

    if results.len() > 1 {
        print!("{}", summary(&results));
    }
}

fn parse_config(matches: &ArgMatches<'_>) -> Result<(Vec<Strategy>, Config), Box<dyn Error>> {
    let strategies = match matches.values_of("strategy") {
        Some(names) => names
            .map(|name| name.parse())
            .collect::<Result<Vec<Strategy>, _>>()?,
        None => Strategy::ALL.to_vec(),
    };

    // the strategy is replaced for each run
    let mut config = Config::new(Strategy::BreadthFirst);
    if let Some(max_depth) = matches.value_of("max-depth") {
        let max_depth = max_depth
            .parse::<u32>()
            .map_err(|err| format!("Invalid max depth '{}': {}", max_depth, err))?;
        config = config.max_depth(max_depth);
    }
    if let Some(max_expanded) = matches.value_of("max-expanded") {
        let max_expanded = max_expanded
            .parse::<usize>()
            .map_err(|err| format!("Invalid max expanded '{}': {}", max_expanded, err))?;
        config = config.max_expanded(max_expanded);
    }
    config = config.prune_deadlocks(!matches.is_present("no-prune"));

    debug!("Strategies: {:?}, config: {:?}", strategies, config);
    Ok((strategies, config))
}

fn load_levels(matches: &ArgMatches<'_>) -> Result<Vec<(String, Level)>, Box<dyn Error>> {
    let mut levels = Vec::new();
    for level_path in matches.values_of("level").into_iter().flatten() {
        let level = level_path
            .load_level()
            .map_err(|err| format!("Can't load level {}: {}", level_path, err))?;
        levels.push((level_path.to_owned(), level));
    }
    Ok(levels)
}

fn print_solution(level: &Level, solution: &SolverOk, include_steps: bool) {
    match solution.outcome {
        Outcome::Solved(ref moves) => {
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        Outcome::NoSolution => println!("No solution"),
        Outcome::Aborted => println!("Aborted"),
    }
    println!("{}", solution.stats);
    if include_steps {
        if let Some(moves) = solution.moves() {
            print!("{}", level.solution(moves, true));
        }
    }
}

fn summary(results: &[(&str, SolverOk)]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["Level", "Strategy", "Result", "Moves", "Pushes", "Generated", "Expanded", "Time (ms)"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for (level_path, solution) in results {
        let (result, move_cnt, push_cnt) = match solution.outcome {
            Outcome::Solved(ref moves) => (
                "Solved",
                moves.move_cnt().to_string(),
                moves.push_cnt().to_string(),
            ),
            Outcome::NoSolution => ("No solution", "-".to_owned(), "-".to_owned()),
            Outcome::Aborted => ("Aborted", "-".to_owned(), "-".to_owned()),
        };
        table.add_row(Row::new(vec![
            Cell::new(level_path),
            Cell::new(&solution.strategy.to_string()),
            Cell::new(result),
            Cell::new(&move_cnt),
            Cell::new(&push_cnt),
            Cell::new(&solution.stats.total_generated().separated_string()),
            Cell::new(&solution.stats.total_expanded().separated_string()),
            Cell::new(&(solution.elapsed.as_millis() as u64).separated_string()),
        ]));
    }
    table
}
