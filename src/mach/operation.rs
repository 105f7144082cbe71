use super::RAM_BASE;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack operators
///
/// Binary operators take `(lhs, rhs)` where `rhs` is the most recently
/// pushed value and `lhs` the one beneath it. The non-commutative ones
/// use `rhs` as the minuend, dividend or value being shifted:
/// `7 3 -` leaves `3 - 7`, not `7 - 3`.
///
/// Arithmetic wraps at 32 bits like the device does.

pub struct Operation {}

impl Operation {
    pub fn negate(val: i32) -> Result<i32> {
        Ok(val.wrapping_neg())
    }

    pub fn invert(val: i32) -> Result<i32> {
        Ok(!val)
    }

    pub fn ram_plus(val: i32) -> Result<i32> {
        Ok(val.wrapping_add(RAM_BASE))
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_add(rhs))
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(rhs.wrapping_sub(lhs))
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_mul(rhs))
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match rhs.checked_div(lhs) {
            Some(i) => Ok(i),
            None => {
                if lhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn modulo(lhs: i32, rhs: i32) -> Result<i32> {
        match rhs.checked_rem(lhs) {
            Some(i) => Ok(i),
            None => {
                if lhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn and(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs & rhs)
    }

    pub fn or(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs | rhs)
    }

    pub fn xor(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs ^ rhs)
    }

    pub fn shift_left(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(rhs << Operation::shift_count(lhs)?)
    }

    pub fn shift_right(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(((rhs as u32) >> Operation::shift_count(lhs)?) as i32)
    }

    fn shift_count(count: i32) -> Result<u32> {
        if (0..32).contains(&count) {
            Ok(count as u32)
        } else {
            Err(error!(IllegalFunctionCall; "SHIFT 0..31"))
        }
    }
}
