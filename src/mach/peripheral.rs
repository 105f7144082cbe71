use crate::error;
use crate::lang::Error;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Number of persisted variables on the device.
pub const ROM_SLOTS: usize = 64;

/// Highest transmit power level, 0 being the lowest.
pub const MAX_TX_POWER: u8 = 31;

/// A frame picked up by the radio along with its link metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub data: Vec<u8>,
    pub rssi: i16,
    pub afc: i16,
    pub lna: u8,
}

impl std::fmt::Display for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "RF ")?;
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        let sign = if self.afc < 0 { "" } else { "+" };
        write!(f, " ({}{}{}:{})", self.rssi, sign, self.afc, self.lna)
    }
}

/// ## Packet radio driver
///
/// `receive` must not block: it returns `None` when nothing is waiting.
pub trait Radio {
    fn init(&mut self, node_id: u8, group: u8, freq: u16);
    fn tx_power(&mut self, level: u8);
    fn receive(&mut self) -> Option<Packet>;
}

/// ## Persisted variable store
pub trait RomVars {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Result<i32>;
    fn set(&mut self, index: usize, value: i32) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Radio stand-in for hosts without one. Remembers how it was configured
/// and hands out packets queued with `inject`. Clones share state, so a
/// handle kept by the caller sees what the runtime did with its copy.
#[derive(Debug, Clone, Default)]
pub struct SimRadio {
    state: Rc<RefCell<SimState>>,
}

#[derive(Debug, Default)]
struct SimState {
    config: Option<(u8, u8, u16)>,
    power: Option<u8>,
    queue: VecDeque<Packet>,
}

impl SimRadio {
    pub fn new() -> SimRadio {
        SimRadio::default()
    }

    /// `(node_id, group, freq)` from the last `init`.
    pub fn config(&self) -> Option<(u8, u8, u16)> {
        self.state.borrow().config
    }

    pub fn power(&self) -> Option<u8> {
        self.state.borrow().power
    }

    pub fn inject(&self, packet: Packet) {
        self.state.borrow_mut().queue.push_back(packet)
    }
}

impl Radio for SimRadio {
    fn init(&mut self, node_id: u8, group: u8, freq: u16) {
        self.state.borrow_mut().config = Some((node_id, group, freq));
    }

    fn tx_power(&mut self, level: u8) {
        self.state.borrow_mut().power = Some(level);
    }

    fn receive(&mut self) -> Option<Packet> {
        let mut state = self.state.borrow_mut();
        state.config?;
        state.queue.pop_front()
    }
}

/// Volatile persisted-variable store. Slots start out zero.
#[derive(Debug, Clone)]
pub struct RamRomVars {
    slots: Vec<i32>,
}

impl RamRomVars {
    pub fn new(len: usize) -> RamRomVars {
        RamRomVars {
            slots: vec![0; len],
        }
    }

    pub fn from_slots(slots: Vec<i32>) -> RamRomVars {
        RamRomVars { slots }
    }

    pub fn slots(&self) -> &[i32] {
        &self.slots
    }
}

impl Default for RamRomVars {
    fn default() -> Self {
        RamRomVars::new(ROM_SLOTS)
    }
}

impl RomVars for RamRomVars {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> Result<i32> {
        match self.slots.get(index) {
            Some(val) => Ok(*val),
            None => Err(error!(AddressOutOfRange)),
        }
    }

    fn set(&mut self, index: usize, value: i32) -> Result<()> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(error!(AddressOutOfRange)),
        }
    }
}
