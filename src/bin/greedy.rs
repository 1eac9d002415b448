use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use greedy_color::color::Coloring;
use greedy_color::greedy::Algorithm;
use greedy_color::util::{read_params, export_results};


/** runs greedy coloring heuristics on a DIMACS instance and exports the
best solution found */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("greedy.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let requested = main_args.value_of("algorithm").map(str::to_string);
    let (inst_filename, graph, sol_file, perf_file) = match read_params(main_args) {
        Ok(params) => params,
        Err(e) => { eprintln!("{}", e); std::process::exit(1); }
    };
    let algorithms:Vec<Algorithm> = match requested {
        None => Algorithm::ALL.to_vec(),
        Some(name) => match Algorithm::from_name(&name) {
            Some(algo) => vec![algo],
            None => {
                let known:Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
                eprintln!("unknown algorithm '{}' (known: {})", name, known.join(", "));
                std::process::exit(1);
            }
        }
    };

    // solve it
    let mut best:Option<(Algorithm, Coloring)> = None;
    let mut color_counts:Vec<usize> = Vec::new();
    let t_start = Instant::now();
    for algo in &algorithms {
        let t_algo = Instant::now();
        let solution = algo.run(&graph);
        let algo_duration = t_algo.elapsed().as_secs_f32();
        println!(
            "{:<16} took {:.3} seconds. Nb colors: {}",
            algo.name(), algo_duration, solution.nb_colors
        );
        color_counts.push(solution.nb_colors);
        let improves = match &best {
            None => true,
            Some((_, incumbent)) => solution.nb_colors < incumbent.nb_colors,
        };
        if improves { best = Some((*algo, solution)); }
    }
    let duration = t_start.elapsed().as_secs_f32();

    if let Some((best_algo, best_solution)) = best {
        if algorithms.len() > 1 {
            println!("=======================");
            println!("best: {} with {} colors", best_algo, best_solution.nb_colors);
        }
        let names:Vec<&str> = algorithms.iter().map(|a| a.name()).collect();
        let stats = json!({
            "algorithms": names,
            "best_algorithm": best_algo.name(),
            "primal_list": color_counts,
            "time_searched": duration,
            "inst_name": inst_filename
        });

        // export results
        if let Err(e) = export_results(&graph, &best_solution, &stats, perf_file, sol_file) {
            eprintln!("unable to export the results: {}", e);
            std::process::exit(1);
        }
    }
}
