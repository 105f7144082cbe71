use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Offset that remaps a RAM-relative address into the device address map.
pub const RAM_BASE: i32 = 0x1000_0000;

/// ## Byte-level read access to the device address space
///
/// Everything `dump` shows comes through here. Implementations decide
/// what is mapped; reading an unmapped address is an error, never a fault.
pub trait Memory {
    fn read_byte(&self, addr: u32) -> Result<u8>;
}

/// A block of bytes mapped at `base`.
#[derive(Debug, Clone)]
pub struct Region {
    base: u32,
    bytes: Vec<u8>,
}

impl Region {
    pub fn new(base: u32, bytes: Vec<u8>) -> Region {
        Region { base, bytes }
    }

    pub fn zeroed(base: u32, len: usize) -> Region {
        Region::new(base, vec![0; len])
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    fn offset(&self, addr: u32) -> Option<usize> {
        let offset = addr.checked_sub(self.base)? as usize;
        if offset < self.bytes.len() {
            Some(offset)
        } else {
            None
        }
    }
}

impl Memory for Region {
    fn read_byte(&self, addr: u32) -> Result<u8> {
        match self.offset(addr) {
            Some(offset) => Ok(self.bytes[offset]),
            None => Err(error!(AddressOutOfRange)),
        }
    }
}

/// Several regions making up an address map. First region containing
/// the address answers.
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    regions: Vec<Region>,
}

impl MemoryMap {
    pub fn new() -> MemoryMap {
        MemoryMap::default()
    }

    pub fn with(mut self, region: Region) -> MemoryMap {
        self.regions.push(region);
        self
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Memory for MemoryMap {
    fn read_byte(&self, addr: u32) -> Result<u8> {
        for region in &self.regions {
            if let Some(offset) = region.offset(addr) {
                return Ok(region.bytes[offset]);
            }
        }
        Err(error!(AddressOutOfRange))
    }
}

/// ## Window onto real memory
///
/// On the device `dump` peeks at arbitrary addresses. `RawWindow` is the
/// only place that does so; it covers `len` bytes starting at `ptr`, which
/// the console sees as addresses `start..start + len`.
pub struct RawWindow {
    ptr: *const u8,
    start: u32,
    len: usize,
}

impl RawWindow {
    /// # Safety
    ///
    /// `ptr..ptr + len` must stay readable for the lifetime of the window.
    /// Reads are volatile, so memory-mapped registers may be included if
    /// reading them has no side effects.
    pub unsafe fn new(ptr: *const u8, start: u32, len: usize) -> RawWindow {
        RawWindow { ptr, start, len }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Memory for RawWindow {
    fn read_byte(&self, addr: u32) -> Result<u8> {
        let offset = match addr.checked_sub(self.start) {
            Some(offset) if (offset as usize) < self.len => offset as usize,
            _ => return Err(error!(AddressOutOfRange)),
        };
        // In bounds per the check above and the contract of `new`.
        Ok(unsafe { std::ptr::read_volatile(self.ptr.add(offset)) })
    }
}
