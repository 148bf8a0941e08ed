pub mod commands;
pub mod console;
pub mod device;

pub use commands::{COMMANDS, COMMANDS_LEN, not_found};
pub use device::{DEVICE, Device, LedMode};
