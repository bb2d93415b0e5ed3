use std::error::Error;
use std::num::NonZeroUsize;
use std::process::exit;

use clap::{App, Arg};
use log::info;

use schedsim::{fcfs, round_robin, shortest_job_first, Metrics, Scheduler};

mod workload;
use workload::{Workload, WorkloadError};

fn main() {
    env_logger::init();

    let matches = App::new("schedsim runner")
        .version("0.1.0")
        .about("Simulates FCFS, SJF and Round Robin scheduling over a workload")
        .arg(
            Arg::with_name("workload")
                .long("workload")
                .takes_value(true)
                .help("TOML workload file; a built-in demo set is used when absent"),
        )
        .arg(
            Arg::with_name("quantum")
                .long("quantum")
                .takes_value(true)
                .help("Round Robin time quantum, overrides the workload value"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print metrics as JSON instead of a table"),
        )
        .get_matches();

    let result = run(
        matches.value_of("workload"),
        matches.value_of("quantum"),
        matches.is_present("json"),
    );

    if let Err(err) = result {
        eprintln!("runner: {}", err);
        exit(1);
    }
}

fn run(
    workload_path: Option<&str>,
    quantum_arg: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let workload = match workload_path {
        Some(path) => Workload::from_path(path)?,
        None => Workload::demo(),
    };

    let quantum = match quantum_arg {
        Some(raw) => raw
            .parse()
            .map_err(|_| WorkloadError::BadQuantum(raw.to_string()))?,
        None => workload.quantum(),
    };
    let quanta = NonZeroUsize::new(quantum)
        .ok_or_else(|| WorkloadError::BadQuantum(quantum.to_string()))?;

    let processes = workload.processes();
    info!(
        "loaded {} processes, round robin quantum {}",
        processes.len(),
        quanta
    );

    let engines: Vec<Box<dyn Scheduler>> = vec![
        Box::new(fcfs()),
        Box::new(shortest_job_first()),
        Box::new(round_robin(quanta)),
    ];

    let mut reports = Vec::new();
    for engine in &engines {
        let metrics = engine.metrics(&processes)?;
        reports.push((engine.name(), metrics));
    }

    if json {
        print_json(&reports)?;
    } else {
        print_table(&reports);
    }

    Ok(())
}

fn print_table(reports: &[(&str, Metrics)]) {
    println!(
        "{:<14} {:>12} {:>12} {:>12}",
        "engine", "turnaround", "waiting", "response"
    );
    println!("{:-<52}", "");

    for (name, metrics) in reports {
        println!(
            "{:<14} {:>12.3} {:>12.3} {:>12.3}",
            name, metrics.avg_turnaround, metrics.avg_waiting, metrics.avg_response
        );
    }
}

fn print_json(reports: &[(&str, Metrics)]) -> Result<(), Box<dyn Error>> {
    let entries: Vec<serde_json::Value> = reports
        .iter()
        .map(|(name, metrics)| serde_json::json!({ "engine": name, "metrics": metrics }))
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
