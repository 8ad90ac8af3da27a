//! # Minim
//!
//! Command line front end for the Minim interpreter.

use std::io::{self, Read, Write};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ansi_term::Colour::Red;
use clap::Parser;

use minim::mach::{Event, Program, Runtime};

/// Instructions retired per execute slice between interrupt checks.
const CYCLES: usize = 5000;

#[derive(Parser)]
#[command(
    name = "minim",
    version,
    about = "Interpreter for the Minim programming language"
)]
struct Args {
    /// Program file; '-' or absence reads the program from standard input
    file: Option<String>,

    /// Byte value pushed by ',' once input is exhausted (reduced mod 256)
    #[arg(short = 'e', value_name = "VALUE", default_value_t = 0)]
    eof: u64,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // clap exits with 2 on usage errors, but the interpreter
            // reserves 2 for out-of-memory; usage problems are 1.
            let _ = error.print();
            process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let program = match load_program(args.file.as_deref()) {
        Ok(program) => program,
        Err(error) => {
            report(&error);
            process::exit(1);
        }
    };

    let mut runtime = Runtime::new(program);
    runtime.set_eof(args.eof as u8);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(bytes) => {
                if out.write_all(&bytes).and_then(|_| out.flush()).is_err() {
                    process::exit(1);
                }
            }
            Event::Input => runtime.input(read_byte(&stdin)),
            Event::Stopped => break,
            Event::Error(error) => {
                report(&error.to_string());
                process::exit(error.exit_code());
            }
        }
    }
}

fn load_program(path: Option<&str>) -> Result<Program, String> {
    match path {
        None | Some("-") => Program::read(&mut io::stdin().lock())
            .map_err(|e| format!("could not read program: {}", e)),
        Some(path) => {
            let mut file = std::fs::File::open(path)
                .map_err(|e| format!("could not open '{}': {}", path, e))?;
            Program::read(&mut file).map_err(|e| format!("could not read '{}': {}", path, e))
        }
    }
}

/// One fresh read per request keeps end-of-input clearable: bytes
/// arriving after a prior end-of-input are still observed.
fn read_byte(stdin: &io::Stdin) -> Option<u8> {
    let mut buf = [0u8; 1];
    match stdin.lock().read(&mut buf) {
        Ok(1) => Some(buf[0]),
        _ => None,
    }
}

fn report(message: &str) {
    eprintln!("minim: {}", Red.paint(message));
}
