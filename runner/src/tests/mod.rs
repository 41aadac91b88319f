use processor::{format_reports, load_processes, simulate, Report};
use scheduler::Process;

use std::env;
use std::fs;

use std::num::NonZeroUsize;

mod arrivals;

fn write_output(folder: &str, name: &str, output: &str) {
    let quantum = quantum();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}___{quantum}.log"), output).unwrap();
}

fn read_output(folder: &str, name: &str) -> String {
    let quantum = quantum();
    fs::read_to_string(format!("../outputs/{folder}/{name}___{quantum}.log")).unwrap()
}

fn run(folder: &str, name: &str, reports: &[Report]) {
    let output = format_reports(reports);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_output(folder, name, &output);
    } else {
        let reference = read_output(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn quantum() -> NonZeroUsize {
    env::var("RR_QUANTUM")
        .unwrap_or("2".to_string())
        .parse::<NonZeroUsize>()
        .unwrap()
}

fn processes(dataset: &str) -> Vec<Process> {
    load_processes(dataset.as_bytes()).unwrap()
}

fn schedule(dataset: &str) -> Vec<Report> {
    simulate(&processes(dataset), quantum())
}
