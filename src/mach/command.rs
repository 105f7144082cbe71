use super::{dump, Operation, Runtime};
use crate::error;
use crate::lang::Error;
#[allow(unused_imports)]
use log::debug;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Every command has this shape. Operands come from the runtime's stack,
/// results go back on it or out through the print buffer.
pub type Handler = fn(&mut Runtime) -> Result<()>;

/// ## A named entry in the command table
///
/// `arity` is how many stack values the handler reads. The runtime checks
/// it before calling, so a command short of operands fails without
/// touching the stack.
#[derive(Clone, Copy)]
pub struct Command {
    name: &'static str,
    arity: usize,
    handler: Handler,
}

impl Command {
    pub fn new(name: &'static str, arity: usize, handler: Handler) -> Command {
        Command {
            name,
            arity,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// ## Ordered command table
///
/// Searched front to back; when two entries share a name the earlier one
/// wins and the later one can never be reached.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<Command>,
}

impl Default for CommandTable {
    fn default() -> Self {
        CommandTable::standard()
    }
}

impl CommandTable {
    pub fn new(entries: Vec<Command>) -> Result<CommandTable> {
        if entries.iter().any(|c| c.name.is_empty()) {
            return Err(error!(InternalError; "EMPTY COMMAND NAME"));
        }
        Ok(CommandTable { entries })
    }

    /// The console's built-in commands, in the order `words` lists them.
    pub fn standard() -> CommandTable {
        #[allow(unused_mut)]
        let mut entries = vec![
            Command::new("nl", 0, cmd_nl),
            Command::new("+", 2, cmd_add),
            Command::new("-", 2, cmd_sub),
            Command::new("*", 2, cmd_mul),
            Command::new("/", 2, cmd_div),
            Command::new("mod", 2, cmd_mod),
            Command::new("negate", 1, cmd_negate),
            Command::new("invert", 1, cmd_invert),
            Command::new("and", 2, cmd_and),
            Command::new("or", 2, cmd_or),
            Command::new("xor", 2, cmd_xor),
            Command::new("<<", 2, cmd_lshift),
            Command::new(">>", 2, cmd_rshift),
            Command::new("ram+", 1, cmd_ram_plus),
            Command::new("dump", 2, cmd_dump),
            Command::new("words", 0, cmd_words),
        ];
        #[cfg(feature = "rf69")]
        entries.extend_from_slice(&[
            Command::new("rf-init", 3, cmd_rf_init),
            Command::new("rf-txpower", 1, cmd_rf_txpower),
        ]);
        #[cfg(feature = "romvars")]
        entries.extend_from_slice(&[
            Command::new("rom@", 1, cmd_rom_at),
            Command::new("rom!", 2, cmd_rom_bang),
        ]);
        CommandTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Command> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn lookup(&self, name: &str) -> Option<Handler> {
        self.find(name).map(|c| c.handler)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.entries.iter()
    }

    /// Each name preceded by a space, then a newline.
    pub fn listing(&self) -> String {
        let mut s = String::new();
        for command in &self.entries {
            s.push(' ');
            s.push_str(command.name);
        }
        s.push('\n');
        s
    }
}

fn cmd_nl(rt: &mut Runtime) -> Result<()> {
    rt.print("\n");
    Ok(())
}

fn cmd_add(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::sum)
}

fn cmd_sub(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::subtract)
}

fn cmd_mul(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::multiply)
}

fn cmd_div(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::divide)
}

fn cmd_mod(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::modulo)
}

fn cmd_negate(rt: &mut Runtime) -> Result<()> {
    rt.unary(Operation::negate)
}

fn cmd_invert(rt: &mut Runtime) -> Result<()> {
    rt.unary(Operation::invert)
}

fn cmd_and(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::and)
}

fn cmd_or(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::or)
}

fn cmd_xor(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::xor)
}

fn cmd_lshift(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::shift_left)
}

fn cmd_rshift(rt: &mut Runtime) -> Result<()> {
    rt.binary(Operation::shift_right)
}

fn cmd_ram_plus(rt: &mut Runtime) -> Result<()> {
    rt.unary(Operation::ram_plus)
}

fn cmd_dump(rt: &mut Runtime) -> Result<()> {
    let count = rt.stack.peek(0)?;
    let start = rt.stack.peek(1)?;
    let listing = dump::listing(&*rt.memory, start as u32, count)?;
    rt.stack.pop()?;
    rt.stack.pop()?;
    rt.print(&listing);
    Ok(())
}

fn cmd_words(rt: &mut Runtime) -> Result<()> {
    let listing = rt.table.listing();
    rt.print(&listing);
    Ok(())
}

#[cfg(feature = "rf69")]
fn narrow<T: TryFrom<i32>>(val: i32, msg: &'static str) -> Result<T> {
    T::try_from(val).map_err(|_| error!(IllegalFunctionCall; msg))
}

#[cfg(feature = "rf69")]
fn cmd_rf_init(rt: &mut Runtime) -> Result<()> {
    let freq: u16 = narrow(rt.stack.peek(0)?, "FREQUENCY")?;
    let group: u8 = narrow(rt.stack.peek(1)?, "GROUP")?;
    let node_id: u8 = narrow(rt.stack.peek(2)?, "NODE ID")?;
    for _ in 0..3 {
        rt.stack.pop()?;
    }
    debug!("rf-init node {} group {} freq {}", node_id, group, freq);
    rt.radio.init(node_id, group, freq);
    rt.node_id = node_id;
    Ok(())
}

#[cfg(feature = "rf69")]
fn cmd_rf_txpower(rt: &mut Runtime) -> Result<()> {
    let level: u8 = narrow(rt.stack.peek(0)?, "LEVEL 0..31")?;
    if level > super::MAX_TX_POWER {
        return Err(error!(IllegalFunctionCall; "LEVEL 0..31"));
    }
    rt.stack.pop()?;
    debug!("rf-txpower {}", level);
    rt.radio.tx_power(level);
    Ok(())
}

#[cfg(feature = "romvars")]
fn rom_index(val: i32) -> Result<usize> {
    usize::try_from(val).map_err(|_| error!(AddressOutOfRange))
}

#[cfg(feature = "romvars")]
fn cmd_rom_at(rt: &mut Runtime) -> Result<()> {
    let index = rom_index(rt.stack.top()?)?;
    let val = rt.rom.get(index)?;
    debug!("rom@ {} -> {}", index, val);
    *rt.stack.top_mut()? = val;
    Ok(())
}

#[cfg(feature = "romvars")]
fn cmd_rom_bang(rt: &mut Runtime) -> Result<()> {
    let index = rom_index(rt.stack.peek(0)?)?;
    let val = rt.stack.peek(1)?;
    rt.rom.set(index, val)?;
    debug!("rom! {} <- {}", index, val);
    rt.stack.pop()?;
    rt.stack.pop()?;
    Ok(())
}
