//! # Minim
//!
//! An interpreter for the Minim programming language: a byte machine
//! with single-character opcodes, 256 data stacks, 256 registers, and
//! two bracket-delimited loop constructs.
//!
//! Run a program from a file, or pipe one in on standard input:
//! ```text
//! minim hello.mn
//! echo '"World!"{.}' | minim
//! ```
//!
//! The interpreter executes the raw source text directly, character by
//! character. There is no compilation pass, no bytecode, and no program
//! format beyond the bytes themselves. See the language reference module
//! for the full opcode table.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod __Language_Reference;

pub mod lang;
pub mod mach;
