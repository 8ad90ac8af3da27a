use super::{Event, Program, Runtime};

mod program_test;
mod stack_test;

fn run(source: &str) -> String {
    run_with(source, &[], 0)
}

fn run_with(source: &str, input: &[u8], eof: u8) -> String {
    let mut runtime = Runtime::new(Program::from(source));
    runtime.set_eof(eof);
    pump(&mut runtime, input, 5000)
}

fn pump(runtime: &mut Runtime, input: &[u8], cycles: usize) -> String {
    let mut input = input.iter().copied();
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Running => {
                s.push_str(&format!("\n{} execution cycles exceeded.\n", cycles));
                break;
            }
            Event::Print(bytes) => s.push_str(&String::from_utf8_lossy(&bytes)),
            Event::Input => runtime.input(input.next()),
            Event::Stopped => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        }
    }
    s
}
