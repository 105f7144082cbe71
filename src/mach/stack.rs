use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Depth of the data stack on the device.
pub const STACK_CAPACITY: usize = 32;

/// ## Operand stack with a top-of-stack register
///
/// The most recent value lives in `top`; everything beneath it is kept
/// in a fixed backing array. `depth` counts live values including `top`,
/// so the backing array holds `depth - 1` of them.

pub struct OperandStack<const N: usize = STACK_CAPACITY> {
    top: i32,
    store: [i32; N],
    depth: usize,
}

impl<const N: usize> Default for OperandStack<N> {
    fn default() -> Self {
        OperandStack {
            top: 0,
            store: [0; N],
            depth: 0,
        }
    }
}

impl<const N: usize> std::fmt::Debug for OperandStack<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<const N: usize> OperandStack<N> {
    pub fn new() -> OperandStack<N> {
        OperandStack::default()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    pub fn is_full(&self) -> bool {
        self.depth >= N
    }

    pub fn clear(&mut self) {
        self.top = 0;
        self.depth = 0;
    }

    pub fn push(&mut self, val: i32) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackOverflow));
        }
        if self.depth > 0 {
            self.store[self.depth - 1] = self.top;
        }
        self.top = val;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<i32> {
        if self.depth == 0 {
            return Err(error!(StackUnderflow));
        }
        let val = self.top;
        self.depth -= 1;
        self.top = match self.depth {
            0 => 0,
            d => self.store[d - 1],
        };
        Ok(val)
    }

    pub fn top(&self) -> Result<i32> {
        if self.depth == 0 {
            Err(error!(StackUnderflow))
        } else {
            Ok(self.top)
        }
    }

    pub fn top_mut(&mut self) -> Result<&mut i32> {
        if self.depth == 0 {
            Err(error!(StackUnderflow))
        } else {
            Ok(&mut self.top)
        }
    }

    /// Value `n` places below the top, `peek(0)` being the top itself.
    pub fn peek(&self, n: usize) -> Result<i32> {
        if n >= self.depth {
            Err(error!(StackUnderflow))
        } else if n == 0 {
            Ok(self.top)
        } else {
            Ok(self.store[self.depth - 1 - n])
        }
    }

    pub fn require(&self, len: usize) -> Result<()> {
        if len > self.depth {
            Err(error!(StackUnderflow))
        } else {
            Ok(())
        }
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let below = self.depth.saturating_sub(1);
        self.store[..below]
            .iter()
            .copied()
            .chain(std::iter::once(self.top).take(self.depth.min(1)))
    }
}
