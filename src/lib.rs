//! # cmder
//!
//! A command console for small devices. Lines of whitespace-separated
//! tokens arrive over a serial link; numbers go on an operand stack and
//! words run commands from a fixed table.
//!
//! ```text
//! [cmder]
//! 0 2 dump
//! 00000000:  5b 63 6d 64 65 72 5d 00  ff ff ff ff ff ff ff ff  [cmder]. ........
//! 00000010:  ff ff ff ff ff ff ff ff  ff ff ff ff ff ff ff ff  ........ ........
//! ```
//!
//! Binary operators take the most recently pushed value as their primary
//! operand, so `1 10 -` leaves `9` and `2 10 /` leaves `5`.
//!
//! ```
//! use cmder::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("2 10 /");
//! assert!(matches!(runtime.execute(), Event::Stopped));
//! assert_eq!(runtime.stack().top().unwrap(), 5);
//! ```

pub mod lang;
pub mod mach;
