//! # cmder
//!
//! Serial command console, running against simulated peripherals.
//!

mod term;

fn main() {
    term::main();
}
