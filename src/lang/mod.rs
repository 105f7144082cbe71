/*!
# Rust Language Module

This Rust module holds the console's error type and the resolved
token the interpreter consumes.

*/

#[macro_use]
mod error;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use token::tokens;
pub use token::Token;

#[cfg(test)]
mod tests;
