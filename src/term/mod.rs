extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use cmder::mach::{Event, MemoryMap, Region, Runtime, SimRadio, RAM_BASE, ROM_SLOTS};
use linefeed::{Interface, ReadResult, Signal, Terminal};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod logger;
mod rom_file;

use rom_file::FileRomVars;

const FLASH_SIZE: usize = 32 * 1024;
const RAM_SIZE: usize = 8 * 1024;
const DEFAULT_ROM_IMAGE: &str = "cmder-rom.bin";

#[cfg(feature = "selftest")]
const SELF_TEST: &str = "0 2 dump nl 3 2 dump nl 0 ram+ 8 dump nl words";

pub fn main() {
    logger::init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let rom_image = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ROM_IMAGE.to_string());
    if let Err(error) = main_loop(interrupted, &rom_image) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, rom_image: &str) -> std::io::Result<()> {
    let mut runtime = Runtime::default()
        .with_memory(memory_map())
        .with_radio(SimRadio::new())
        .with_rom(FileRomVars::open(rom_image, ROM_SLOTS));
    let interface = Interface::new("cmder")?;
    interface.set_report_signal(Signal::Interrupt, true);

    interface.write_fmt(format_args!("\n[cmder]\n"))?;
    #[cfg(feature = "selftest")]
    runtime.enter(SELF_TEST);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.clear();
            interrupted.store(false, Ordering::SeqCst);
            interface.write_fmt(format_args!("?BREAK\n"))?;
        };
        runtime.poll_radio();
        match runtime.execute() {
            Event::Stopped => match interface.read_line()? {
                ReadResult::Input(string) => {
                    runtime.enter(&string);
                    if !string.trim().is_empty() {
                        interface.add_history_unique(string);
                    }
                }
                ReadResult::Signal(Signal::Interrupt) => {
                    interface.set_buffer("")?;
                    interrupted.store(true, Ordering::SeqCst);
                }
                ReadResult::Signal(_) | ReadResult::Eof => break,
            },
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}", s))?;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    print_error(&interface, &error.to_string())?;
                }
            }
        }
    }
    Ok(())
}

fn print_error<T: Terminal>(interface: &Interface<T>, s: &str) -> std::io::Result<()> {
    interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(format!("?{}", s))))
}

/// Flash at zero reads as erased except for the banner, RAM comes up with
/// whatever noise the cells settle on.
fn memory_map() -> MemoryMap {
    let mut flash = Region::new(0, vec![0xff; FLASH_SIZE]);
    let banner = b"[cmder]\0";
    flash.bytes_mut()[..banner.len()].copy_from_slice(banner);
    let mut ram = Region::zeroed(RAM_BASE as u32, RAM_SIZE);
    rand::thread_rng().fill(ram.bytes_mut());
    MemoryMap::new().with(flash).with(ram)
}
