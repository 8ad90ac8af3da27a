/*!
# Minim Language Module

Definitions shared by every layer of the interpreter: program positions
and the fatal error type.

*/

#[macro_use]
mod error;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::ErrorCode;

/// Byte offset into the program text.
pub type Position = usize;
