use minim::lang::Error;
use minim::mach::{Event, Program, Runtime};

#[allow(dead_code)]
pub fn run(source: &str) -> String {
    run_with(source, &[], 0)
}

#[allow(dead_code)]
pub fn run_with(source: &str, input: &[u8], eof: u8) -> String {
    let mut runtime = Runtime::new(Program::from(source));
    runtime.set_eof(eof);
    let mut input = input.iter().copied();
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Running => {
                s.push_str("\n5000 execution cycles exceeded.\n");
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

/// Pump a program to completion and return its fatal error, if any.
/// Input is answered with end-of-input throughout.
#[allow(dead_code)]
pub fn run_error(source: &str) -> Option<Error> {
    let mut runtime = Runtime::new(Program::from(source));
    loop {
        match runtime.execute(100_000) {
            Event::Running | Event::Print(_) => {}
            Event::Input => runtime.input(None),
            Event::Stopped => return None,
            Event::Error(error) => return Some(error),
        }
    }
}
