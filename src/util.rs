use clap::ArgMatches;
use serde_json::Value;

use crate::color::{checker, CheckerResult, Coloring};
use crate::dimacs::{self, DimacsError};
use crate::graph::Graph;

/** reads command line input and returns the instance name, the graph,
the solution filename and the stats filename */
pub fn read_params(main_args:ArgMatches)
-> Result<(String, Graph, Option<String>, Option<String>), DimacsError> {
    let inst_filename = main_args.value_of("instance").unwrap(); // required arg
    // read value of the solution filename
    let sol_file:Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file:Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    let graph = dimacs::read_from_file(inst_filename)?;
    graph.display_statistics();
    println!("=======================");
    Ok((inst_filename.to_string(), graph, sol_file, perf_file))
}

/** exports run results to files. the solution is validated before being
written; an invalid one is reported but still exported for inspection. */
pub fn export_results(
    graph:&Graph,
    solution:&Coloring,
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
) -> std::io::Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        let mut file = std::fs::File::create(filename.as_str())?;
        std::io::Write::write_all(&mut file, stats.to_string().as_bytes())?;
    }
    // export solution
    if let Some(filename) = sol_file {
        let checker_result = checker(graph, &solution.colors);
        match checker_result {
            CheckerResult::Valid(_) => {},
            _ => { println!("invalid solution (reason: {:?})", checker_result); }
        }
        solution.write_solution(filename.as_str())?;
    }
    Ok(())
}
