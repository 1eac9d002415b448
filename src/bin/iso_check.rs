use std::time::Instant;

use clap::{App, load_yaml};

use greedy_color::refinement::{compare, read_instance_pairs};


/** compares matrix pairs with color refinement: prints `+++` when a pair
may be isomorphic and `---` when it certainly is not */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("iso_check.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap(); // required arg
    let pairs = match read_instance_pairs(inst_filename) {
        Ok(pairs) => pairs,
        Err(e) => { eprintln!("{}", e); std::process::exit(1); }
    };

    let t_start = Instant::now();
    let mut nb_possible = 0;
    for (i,(a,b)) in pairs.iter().enumerate() {
        let t_pair = Instant::now();
        match compare(a, b) {
            Ok(verdict) => {
                if verdict.possibly_isomorphic() { nb_possible += 1; }
                println!(
                    "{:>4} ({} rows): {} ({:.3}s)",
                    i, a.nb_rows(), verdict, t_pair.elapsed().as_secs_f32()
                );
            }
            Err(e) => {
                eprintln!("pair {}: {}", i, e);
                std::process::exit(1);
            }
        }
    }
    let duration = t_start.elapsed().as_secs_f32();
    println!("=======================");
    println!(
        "{} pairs ({} possibly isomorphic) in {:.3} seconds",
        pairs.len(), nb_possible, duration
    );
}
