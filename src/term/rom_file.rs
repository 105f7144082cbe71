use cmder::error;
use cmder::lang::Error;
use cmder::mach::{RamRomVars, RomVars};
use crc::crc32;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Error>;

/// ## Persisted variables kept in a file
///
/// The image is every slot as a little-endian `i32` followed by a CRC-32
/// of those bytes. A missing or corrupt image starts out all zero, the way
/// a freshly erased flash page would.
pub struct FileRomVars {
    path: PathBuf,
    slots: RamRomVars,
}

impl FileRomVars {
    pub fn open<P: Into<PathBuf>>(path: P, len: usize) -> FileRomVars {
        let path = path.into();
        let slots = match fs::read(&path) {
            Ok(bytes) => match decode(&bytes, len) {
                Some(slots) => {
                    info!("rom image {} loaded", path.display());
                    RamRomVars::from_slots(slots)
                }
                None => {
                    warn!("rom image {} is corrupt, starting blank", path.display());
                    RamRomVars::new(len)
                }
            },
            Err(error) => {
                info!("rom image {}: {}", path.display(), error);
                RamRomVars::new(len)
            }
        };
        FileRomVars { path, slots }
    }

    fn save(&self) -> Result<()> {
        match fs::write(&self.path, encode(self.slots.slots())) {
            Ok(()) => Ok(()),
            Err(error) => {
                warn!("rom image {}: {}", self.path.display(), error);
                Err(error!(InternalError; "ROM WRITE FAILED"))
            }
        }
    }
}

impl RomVars for FileRomVars {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> Result<i32> {
        self.slots.get(index)
    }

    fn set(&mut self, index: usize, value: i32) -> Result<()> {
        let previous = self.slots.get(index)?;
        self.slots.set(index, value)?;
        if let Err(error) = self.save() {
            self.slots.set(index, previous)?;
            return Err(error);
        }
        Ok(())
    }
}

fn encode(slots: &[i32]) -> Vec<u8> {
    let mut bytes: Vec<u8> = slots.iter().flat_map(|v| v.to_le_bytes()).collect();
    let crc = crc32::checksum_ieee(&bytes);
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes
}

fn decode(bytes: &[u8], len: usize) -> Option<Vec<i32>> {
    if bytes.len() != len * 4 + 4 {
        return None;
    }
    let (data, crc) = bytes.split_at(len * 4);
    let mut crc_bytes = [0u8; 4];
    crc_bytes.copy_from_slice(crc);
    if crc32::checksum_ieee(data) != u32::from_le_bytes(crc_bytes) {
        return None;
    }
    Some(
        data.chunks_exact(4)
            .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}
