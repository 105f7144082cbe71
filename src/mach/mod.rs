/*!
## Rust Machine Module

This Rust module is the console interpreter: an operand stack, the
command table and the handlers behind it.

*/

mod command;
mod dump;
mod memory;
mod operation;
mod peripheral;
mod runtime;
mod stack;

pub use command::Command;
pub use command::CommandTable;
pub use command::Handler;
pub use dump::listing as dump_listing;
pub use memory::Memory;
pub use memory::MemoryMap;
pub use memory::RawWindow;
pub use memory::Region;
pub use memory::RAM_BASE;
pub use operation::Operation;
pub use peripheral::Packet;
pub use peripheral::Radio;
pub use peripheral::RamRomVars;
pub use peripheral::RomVars;
pub use peripheral::SimRadio;
pub use peripheral::MAX_TX_POWER;
pub use peripheral::ROM_SLOTS;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::OperandStack;
pub use stack::STACK_CAPACITY;

#[cfg(test)]
mod tests;
