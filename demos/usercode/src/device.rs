use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU16, Ordering};

use linecmd_config::{PERIOD_DEFAULT_MS, PERIOD_MAX_MS, PERIOD_MIN_MS};

/// LED behaviour selected with the `status` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedMode {
    Off = 0,
    On = 1,
    Flash = 2,
}

impl LedMode {
    /// Accepts exactly `"0"`, `"1"` or `"2"`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "0" => Some(LedMode::Off),
            "1" => Some(LedMode::On),
            "2" => Some(LedMode::Flash),
            _ => None,
        }
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => LedMode::On,
            2 => LedMode::Flash,
            _ => LedMode::Off,
        }
    }
}

/// Error returned by [`Device::set_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodOutOfRange;

/// State the command handlers act on.
///
/// Handlers are plain `fn`s in a static table, so the state lives in atomics
/// that can be shared without locking.
#[derive(Debug)]
pub struct Device {
    mode: AtomicU8,
    period_ms: AtomicU16,
    null_as_arg: AtomicBool,
}

/// The one device of the demo firmware.
pub static DEVICE: Device = Device::new();

impl Device {
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(LedMode::Off as u8),
            period_ms: AtomicU16::new(PERIOD_DEFAULT_MS),
            null_as_arg: AtomicBool::new(false),
        }
    }

    pub fn mode(&self) -> LedMode {
        LedMode::from_raw(self.mode.load(Ordering::Relaxed))
    }

    pub fn set_mode(&self, mode: LedMode) {
        self.mode.store(mode as u8, Ordering::Relaxed);
    }

    pub fn period_ms(&self) -> u16 {
        self.period_ms.load(Ordering::Relaxed)
    }

    pub fn set_period(&self, period_ms: u16) -> Result<(), PeriodOutOfRange> {
        if !(PERIOD_MIN_MS..=PERIOD_MAX_MS).contains(&period_ms) {
            return Err(PeriodOutOfRange);
        }
        self.period_ms.store(period_ms, Ordering::Relaxed);
        Ok(())
    }

    pub fn null_as_arg(&self) -> bool {
        self.null_as_arg.load(Ordering::Relaxed)
    }

    pub fn set_null_as_arg(&self, enabled: bool) {
        self.null_as_arg.store(enabled, Ordering::Relaxed);
    }

    /// Flips the null-as-argument policy and returns the new value.
    pub fn toggle_null_as_arg(&self) -> bool {
        !self.null_as_arg.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}
