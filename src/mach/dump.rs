use super::Memory;
use crate::lang::Error;
use std::fmt::Write;

type Result<T> = std::result::Result<T, Error>;

const ROW: u32 = 16;
const BLOCK: u32 = 8;

/// Hex and ASCII listing of `count` rows of 16 bytes starting at the row
/// containing `start`. Bytes before `start` on the first row are blanked.
///
/// ```text
/// 00000010:           63 64 65 66 67  68 69 6a 6b 6c 6d 6e 6f     cdefg hijklmno
/// ```
///
/// The whole listing is read before anything is returned, so a bad
/// address yields an error and no partial output.
pub fn listing(memory: &dyn Memory, start: u32, count: i32) -> Result<String> {
    let mut s = String::new();
    let skip = start % ROW;
    let mut base = start & !(ROW - 1);
    for row in 0..count.max(0) {
        let skip = if row == 0 { skip } else { 0 };
        let mut bytes = [None; ROW as usize];
        for offset in skip..ROW {
            bytes[offset as usize] = Some(memory.read_byte(base.wrapping_add(offset))?);
        }
        format_row(&mut s, base, &bytes);
        base = base.wrapping_add(ROW);
    }
    Ok(s)
}

fn format_row(s: &mut String, base: u32, bytes: &[Option<u8>; ROW as usize]) {
    // Writing to a String can't fail.
    let _ = write!(s, "{:08x}: ", base);
    for (i, byte) in bytes.iter().enumerate() {
        if i as u32 % BLOCK == 0 {
            s.push(' ');
        }
        match byte {
            Some(b) => {
                let _ = write!(s, "{:02x} ", b);
            }
            None => s.push_str("   "),
        }
    }
    for (i, byte) in bytes.iter().enumerate() {
        if i as u32 % BLOCK == 0 {
            s.push(' ');
        }
        s.push(match byte {
            Some(b) => printable(*b),
            None => ' ',
        });
    }
    s.push('\n');
}

fn printable(b: u8) -> char {
    if (b' '..=b'~').contains(&b) {
        b as char
    } else {
        '.'
    }
}
