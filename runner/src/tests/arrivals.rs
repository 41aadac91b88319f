use core::module_path;
use function_name::named;

use super::{processes, quantum, run, schedule};
use processor::Processor;

#[test]
#[named]
pub fn staggered() {
    let reports = schedule(
        "1,6,2
2,8,0
3,7,4
4,3,6
",
    );

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}

#[test]
#[named]
pub fn idle_gap() {
    let reports = schedule(
        "1,2,5,2
2,1,10,1
3,4,5,1
",
    );

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}

#[test]
pub fn repeated_runs_match() {
    let processor = Processor::new(processes(
        "1,6,2
2,8,0
3,7,4
4,3,6
",
    ));
    let first = processor.run_all(quantum());
    let second = processor.run_all(quantum());

    use pretty_assertions::assert_eq;
    assert_eq!(first, second);
    assert_eq!(processor.processes(), &processes("1,6,2\n2,8,0\n3,7,4\n4,3,6\n")[..]);
}
