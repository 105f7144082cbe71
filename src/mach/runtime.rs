use super::{
    CommandTable, Handler, Memory, MemoryMap, OperandStack, Radio, RamRomVars, RomVars, SimRadio,
};
use crate::error;
use crate::lang::{tokens, Error, Token};
use log::{trace, warn};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Events for the caller to handle
///
/// `execute` runs until there is something to show or nothing left to do.
#[derive(Debug)]
pub enum Event {
    Stopped,
    Print(String),
    Errors(Vec<Error>),
}

/// ## Console interpreter
///
/// Owns the operand stack, the command table and the collaborators the
/// bridge commands talk to. Everything runs on the caller's thread and
/// every command finishes before the next token is looked at.
pub struct Runtime {
    pub(super) stack: OperandStack,
    pub(super) table: CommandTable,
    pub(super) memory: Box<dyn Memory>,
    pub(super) radio: Box<dyn Radio>,
    pub(super) rom: Box<dyn RomVars>,
    pub(super) node_id: u8,
    pending: VecDeque<Token>,
    print_buffer: String,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            stack: OperandStack::default(),
            table: CommandTable::standard(),
            memory: Box::new(MemoryMap::new()),
            radio: Box::new(SimRadio::new()),
            rom: Box::new(RamRomVars::default()),
            node_id: 0,
            pending: VecDeque::new(),
            print_buffer: String::new(),
        }
    }
}

impl Runtime {
    pub fn with_table(mut self, table: CommandTable) -> Runtime {
        self.table = table;
        self
    }

    pub fn with_memory<M: Memory + 'static>(mut self, memory: M) -> Runtime {
        self.memory = Box::new(memory);
        self
    }

    pub fn with_radio<R: Radio + 'static>(mut self, radio: R) -> Runtime {
        self.radio = Box::new(radio);
        self
    }

    pub fn with_rom<V: RomVars + 'static>(mut self, rom: V) -> Runtime {
        self.rom = Box::new(rom);
        self
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Node id given to the last `rf-init`, zero until then.
    pub fn node_id(&self) -> u8 {
        self.node_id
    }

    pub fn push(&mut self, val: i32) -> Result<()> {
        self.stack.push(val)
    }

    pub fn pop(&mut self) -> Result<i32> {
        self.stack.pop()
    }

    pub fn lookup(&self, name: &str) -> Option<Handler> {
        self.table.lookup(name)
    }

    pub fn invoke(&mut self, name: &str) -> Result<()> {
        let command = match self.table.find(name) {
            Some(command) => *command,
            None => return Err(error!(UnknownCommand, name)),
        };
        trace!("{} {:?}", name, self.stack);
        self.stack
            .require(command.arity())
            .and_then(|_| (command.handler())(self))
            .map_err(|e| e.in_word(name))
    }

    pub fn exec(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::Literal(val) => self.push(*val),
            Token::Word(name) => self.invoke(name),
        }
    }

    /// Queue a line of input for `execute`.
    pub fn enter(&mut self, line: &str) {
        self.pending.extend(tokens(line));
    }

    pub fn execute(&mut self) -> Event {
        loop {
            if !self.print_buffer.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
            let token = match self.pending.pop_front() {
                Some(token) => token,
                None => return Event::Stopped,
            };
            if let Err(error) = self.exec(&token) {
                warn!("{}; {} tokens dropped", error, self.pending.len());
                self.pending.clear();
                return Event::Errors(vec![error]);
            }
        }
    }

    /// Drop pending input and empty the stack.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.stack.clear();
    }

    pub fn print(&mut self, s: &str) {
        self.print_buffer.push_str(s);
    }

    /// Raw byte from the serial line, echoed as its decimal value.
    pub fn echo(&mut self, byte: u8) {
        self.print(&format!("{}\n", byte));
    }

    /// Check the radio for a packet. Nothing is received until `rf-init`
    /// has given the node a non-zero id.
    pub fn poll_radio(&mut self) {
        if self.node_id == 0 {
            return;
        }
        if let Some(packet) = self.radio.receive() {
            trace!("{} byte packet", packet.data.len());
            self.print(&format!("{}\n", packet));
        }
    }

    pub(super) fn unary(&mut self, op: fn(i32) -> Result<i32>) -> Result<()> {
        let top = self.stack.top_mut()?;
        *top = op(*top)?;
        Ok(())
    }

    /// Pops the top value and folds it into the one beneath. Nothing moves
    /// if the operator fails.
    pub(super) fn binary(&mut self, op: fn(i32, i32) -> Result<i32>) -> Result<()> {
        let rhs = self.stack.peek(0)?;
        let lhs = self.stack.peek(1)?;
        let val = op(lhs, rhs)?;
        self.stack.pop()?;
        *self.stack.top_mut()? = val;
        Ok(())
    }
}
