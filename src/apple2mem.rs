//! # Apple II Banked Memory with Language Card
//!
//! Owns the emulated 64KB address space as 16 windows of 4KB and models the
//! Language Card (LC) bank-switching hardware that overlays the ROM region.
//!
//! ## Memory Map
//!
//! | range         | banks | contents                                   |
//! |---------------|-------|--------------------------------------------|
//! | `$0000-$BFFF` | 0-11  | main RAM                                   |
//! | `$C000-$CFFF` | 12    | I/O page, treated as RAM                   |
//! | `$D000-$DFFF` | 13    | ROM, LC bank 1 RAM or LC bank 2 RAM        |
//! | `$E000-$FFFF` | 14-15 | ROM or LC high RAM                         |
//!
//! ## Read Bus vs Write Bus
//!
//! The hardware can read ROM while writes land in LC RAM, so reads and writes
//! of `$D000-$FFFF` resolve independently. Each bank window carries two
//! [`BankSource`] tags, one for each direction, and both are recomputed on
//! every LC state change. [`ReadView`] and [`WriteView`] route accesses
//! through the matching tag.
//!
//! ## Soft Switches
//!
//! `$C080-$C08F` are the 16 LC soft switches. Bit 3 selects bank 1 (set) or
//! bank 2 (clear); bits 1-0 select the command:
//!
//! | cmd | read mapping | write mapping          |
//! |-----|--------------|------------------------|
//! | 00  | LC RAM       | write-protected        |
//! | 01  | ROM          | write-enable candidate  |
//! | 10  | ROM          | write-protected        |
//! | 11  | LC RAM       | write-enable candidate  |
//!
//! Write-enable needs two consecutive reads of a candidate switch. Any write
//! to a switch, or a read of a non-candidate switch, clears the latch.

use std::fs;
use std::path::Path;

use log::{info, trace, warn};

use crate::memory::{bank_offset, ReadBus, WriteBus, BANK_SIZE, NUM_BANKS};
use crate::{EmulatorError, Result};

/// Size of the ROM image covering `$D000-$FFFF`.
pub const ROM_SIZE: usize = BANK_SIZE * 3;

/// First LC soft-switch address.
pub const SOFT_SWITCH_FIRST: u16 = 0xC080;

/// Last LC soft-switch address.
pub const SOFT_SWITCH_LAST: u16 = 0xC08F;

const LC_D000_BANK: usize = 13;
const LC_FIRST_BANK: usize = LC_D000_BANK;

/// Backing storage that a bank window resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankSource {
    /// Main RAM bank with the given index (0-15).
    ///
    /// Banks 13-15 double as LC bank 1 / LC high RAM.
    Ram(usize),

    /// The second 4KB LC bank at `$D000-$DFFF`.
    LcBank2,

    /// ROM image slice (0 = `$D000`, 1 = `$E000`, 2 = `$F000`).
    Rom(usize),

    /// Discard buffer slice used while LC writes are disabled.
    WriteSink(usize),
}

/// Which LC bank is mapped at `$D000-$DFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcBank {
    Bank1,
    Bank2,
}

/// Language Card switch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCardState {
    /// Reads of `$D000-$FFFF` come from LC RAM instead of ROM.
    pub read_enabled: bool,

    /// Writes of `$D000-$FFFF` land in LC RAM instead of the write sink.
    pub write_enabled: bool,

    /// Bank mapped at `$D000-$DFFF`.
    pub bank: LcBank,

    /// One read of a write-enable candidate switch has been seen.
    pub write_prequalified: bool,
}

impl Default for LanguageCardState {
    fn default() -> Self {
        Self {
            read_enabled: false,
            write_enabled: false,
            bank: LcBank::Bank1,
            write_prequalified: false,
        }
    }
}

/// Owner of the emulated Apple II memory, including the Language Card.
///
/// On construction and after [`reset`](Apple2Memory::reset) all RAM is zero,
/// LC read and write are disabled and bank 1 is selected. A loaded ROM image
/// survives resets.
///
/// # Examples
///
/// ```
/// use prodos8emu::{Apple2Memory, ReadBus, WriteBus};
///
/// let mut mem = Apple2Memory::new();
///
/// // Enable LC writes but keep reading ROM: the write lands in LC RAM,
/// // the read still sees the (empty) ROM.
/// mem.set_lc_write_enabled(true);
/// mem.write_bus().write(0xD000, 0x42);
/// assert_eq!(mem.read_bus().read(0xD000), 0x00);
///
/// mem.set_lc_read_enabled(true);
/// assert_eq!(mem.read_bus().read(0xD000), 0x42);
/// ```
pub struct Apple2Memory {
    /// Main RAM, 16 banks. Banks 13-15 are LC bank 1 and LC high RAM.
    main_ram: Box<[[u8; BANK_SIZE]; NUM_BANKS]>,

    /// LC bank 2 at `$D000-$DFFF`.
    lc_bank2: Box<[u8; BANK_SIZE]>,

    /// ROM image, zero-filled until `load_rom` succeeds.
    rom: Box<[u8; ROM_SIZE]>,

    /// Write target for `$D000-$FFFF` while LC writes are disabled.
    write_sink: Box<[u8; ROM_SIZE]>,

    read_map: [BankSource; NUM_BANKS],
    write_map: [BankSource; NUM_BANKS],

    lc: LanguageCardState,
}

impl Apple2Memory {
    /// Creates memory with all RAM zeroed, LC disabled and bank 1 selected.
    pub fn new() -> Self {
        let mut mem = Self {
            main_ram: Box::new([[0; BANK_SIZE]; NUM_BANKS]),
            lc_bank2: Box::new([0; BANK_SIZE]),
            rom: Box::new([0; ROM_SIZE]),
            write_sink: Box::new([0; ROM_SIZE]),
            read_map: [BankSource::Ram(0); NUM_BANKS],
            write_map: [BankSource::Ram(0); NUM_BANKS],
            lc: LanguageCardState::default(),
        };
        mem.update_banks();
        mem
    }

    /// Zeroes all RAM and restores the power-on LC state.
    ///
    /// The ROM image is preserved.
    pub fn reset(&mut self) {
        for bank in self.main_ram.iter_mut() {
            bank.fill(0);
        }
        self.lc_bank2.fill(0);
        self.write_sink.fill(0);
        self.lc = LanguageCardState::default();
        self.update_banks();
    }

    /// Installs a 12KB ROM image for `$D000-$FFFF`.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::RomSizeMismatch`] if `bytes` is not exactly
    /// [`ROM_SIZE`] long. The previous image is left untouched.
    pub fn load_rom(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != ROM_SIZE {
            warn!(
                "rejecting ROM image: {} bytes, expected {}",
                bytes.len(),
                ROM_SIZE
            );
            return Err(EmulatorError::RomSizeMismatch {
                expected: ROM_SIZE,
                actual: bytes.len(),
            });
        }
        self.rom.copy_from_slice(bytes);
        info!("loaded {} byte ROM image at $D000-$FFFF", ROM_SIZE);
        Ok(())
    }

    /// Reads a ROM image from disk and installs it with [`load_rom`](Self::load_rom).
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let bytes = fs::read(path.as_ref())?;
        self.load_rom(&bytes)
    }

    // ========== Bus Views ==========

    /// Returns the read-only bus view (reads follow the LC read mapping).
    pub fn read_bus(&self) -> ReadView<'_> {
        ReadView { mem: self }
    }

    /// Returns the mutable bus view (accesses follow the LC write mapping).
    pub fn write_bus(&mut self) -> WriteView<'_> {
        WriteView { mem: self }
    }

    /// Storage a read of `bank` currently resolves to.
    pub fn read_source(&self, bank: usize) -> BankSource {
        self.read_map[bank]
    }

    /// Storage a write of `bank` currently resolves to.
    pub fn write_source(&self, bank: usize) -> BankSource {
        self.write_map[bank]
    }

    fn storage(&self, source: BankSource) -> &[u8] {
        match source {
            BankSource::Ram(bank) => &self.main_ram[bank][..],
            BankSource::LcBank2 => &self.lc_bank2[..],
            BankSource::Rom(slice) => &self.rom[slice * BANK_SIZE..(slice + 1) * BANK_SIZE],
            BankSource::WriteSink(slice) => {
                &self.write_sink[slice * BANK_SIZE..(slice + 1) * BANK_SIZE]
            }
        }
    }

    fn storage_mut(&mut self, source: BankSource) -> &mut [u8] {
        match source {
            BankSource::Ram(bank) => &mut self.main_ram[bank][..],
            BankSource::LcBank2 => &mut self.lc_bank2[..],
            BankSource::Rom(slice) => &mut self.rom[slice * BANK_SIZE..(slice + 1) * BANK_SIZE],
            BankSource::WriteSink(slice) => {
                &mut self.write_sink[slice * BANK_SIZE..(slice + 1) * BANK_SIZE]
            }
        }
    }

    fn read_via(&self, map: &[BankSource; NUM_BANKS], addr: u16) -> u8 {
        let (bank, offset) = bank_offset(addr);
        self.storage(map[bank])[offset]
    }

    // ========== Language Card State ==========

    /// Current LC switch state.
    pub fn lc_state(&self) -> LanguageCardState {
        self.lc
    }

    /// Returns true if reads of `$D000-$FFFF` come from LC RAM.
    pub fn is_lc_read_enabled(&self) -> bool {
        self.lc.read_enabled
    }

    /// Returns true if writes of `$D000-$FFFF` land in LC RAM.
    pub fn is_lc_write_enabled(&self) -> bool {
        self.lc.write_enabled
    }

    /// Returns true if LC bank 1 is mapped at `$D000-$DFFF`.
    pub fn is_lc_bank1(&self) -> bool {
        self.lc.bank == LcBank::Bank1
    }

    /// Returns true after one read of a write-enable candidate switch.
    pub fn is_lc_write_prequalified(&self) -> bool {
        self.lc.write_prequalified
    }

    /// Maps LC RAM (enabled) or ROM (disabled) for reads of `$D000-$FFFF`.
    pub fn set_lc_read_enabled(&mut self, enable: bool) {
        self.lc.read_enabled = enable;
        self.update_banks();
    }

    /// Maps LC RAM (enabled) or the write sink (disabled) for writes of `$D000-$FFFF`.
    pub fn set_lc_write_enabled(&mut self, enable: bool) {
        self.lc.write_enabled = enable;
        self.update_banks();
    }

    /// Selects LC bank 1 (`true`) or bank 2 (`false`) for `$D000-$DFFF`.
    ///
    /// `$E000-$FFFF` is a single bank and is unaffected.
    pub fn set_lc_bank1(&mut self, bank1: bool) {
        self.lc.bank = if bank1 { LcBank::Bank1 } else { LcBank::Bank2 };
        self.update_banks();
    }

    /// Processes an access to one of the LC soft switches at `$C080-$C08F`.
    ///
    /// Returns `false` without touching any state when `addr` is outside the
    /// soft-switch page.
    ///
    /// Bank select and read mapping take effect on every access. Write-enable
    /// follows the two-read protocol: a read of a candidate (01/11) with the
    /// latch already set enables writes and keeps the latch set, otherwise it
    /// only sets the latch. A write to any switch, or a read of 00/10, clears
    /// the latch; 00/10 also force writes off in either direction.
    pub fn apply_soft_switch(&mut self, addr: u16, is_read: bool) -> bool {
        if !(SOFT_SWITCH_FIRST..=SOFT_SWITCH_LAST).contains(&addr) {
            return false;
        }

        let command = addr & 0x03;
        let write_candidate = command & 0x01 != 0;

        self.lc.bank = if addr & 0x08 != 0 {
            LcBank::Bank1
        } else {
            LcBank::Bank2
        };
        self.lc.read_enabled = command == 0b00 || command == 0b11;

        if is_read && write_candidate {
            if self.lc.write_prequalified {
                self.lc.write_enabled = true;
            } else {
                self.lc.write_prequalified = true;
            }
        } else {
            self.lc.write_prequalified = false;
            if !write_candidate {
                self.lc.write_enabled = false;
            }
        }

        self.update_banks();

        trace!(
            "LC switch ${:04X} {}: read={} write={} bank={:?} prequal={}",
            addr,
            if is_read { "read" } else { "write" },
            self.lc.read_enabled,
            self.lc.write_enabled,
            self.lc.bank,
            self.lc.write_prequalified
        );

        true
    }

    /// Recomputes both bank maps from the current LC state.
    fn update_banks(&mut self) {
        for bank in 0..LC_FIRST_BANK {
            self.read_map[bank] = BankSource::Ram(bank);
            self.write_map[bank] = BankSource::Ram(bank);
        }

        for (slice, bank) in (LC_FIRST_BANK..NUM_BANKS).enumerate() {
            let lc_ram = if bank == LC_D000_BANK && self.lc.bank == LcBank::Bank2 {
                BankSource::LcBank2
            } else {
                BankSource::Ram(bank)
            };

            self.read_map[bank] = if self.lc.read_enabled {
                lc_ram
            } else {
                BankSource::Rom(slice)
            };
            self.write_map[bank] = if self.lc.write_enabled {
                lc_ram
            } else {
                BankSource::WriteSink(slice)
            };
        }
    }
}

impl Default for Apple2Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads through the read mapping.
impl ReadBus for Apple2Memory {
    fn read(&self, addr: u16) -> u8 {
        self.read_via(&self.read_map, addr)
    }
}

/// Writes through the write mapping.
impl WriteBus for Apple2Memory {
    fn write(&mut self, addr: u16, value: u8) {
        let (bank, offset) = bank_offset(addr);
        let source = self.write_map[bank];
        self.storage_mut(source)[offset] = value;
    }
}

/// Read-only view over the current read mapping.
#[derive(Clone, Copy)]
pub struct ReadView<'a> {
    mem: &'a Apple2Memory,
}

impl ReadView<'_> {
    /// Storage that `bank` resolves to on this view.
    pub fn source(&self, bank: usize) -> BankSource {
        self.mem.read_map[bank]
    }
}

impl ReadBus for ReadView<'_> {
    fn read(&self, addr: u16) -> u8 {
        self.mem.read_via(&self.mem.read_map, addr)
    }
}

/// Mutable view over the current write mapping.
///
/// Reads through this view see the same storage writes go to. For the top
/// three banks that may be LC RAM while the CPU is reading ROM, or the write
/// sink while writes are disabled.
pub struct WriteView<'a> {
    mem: &'a mut Apple2Memory,
}

impl WriteView<'_> {
    /// Storage that `bank` resolves to on this view.
    pub fn source(&self, bank: usize) -> BankSource {
        self.mem.write_map[bank]
    }
}

impl ReadBus for WriteView<'_> {
    fn read(&self, addr: u16) -> u8 {
        self.mem.read_via(&self.mem.write_map, addr)
    }
}

impl WriteBus for WriteView<'_> {
    fn write(&mut self, addr: u16, value: u8) {
        WriteBus::write(&mut *self.mem, addr, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_rom() -> Vec<u8> {
        (0..ROM_SIZE).map(|i| (i >> 4) as u8 ^ 0x5A).collect()
    }

    #[test]
    fn test_initial_state() {
        let mem = Apple2Memory::new();

        assert!(!mem.is_lc_read_enabled());
        assert!(!mem.is_lc_write_enabled());
        assert!(mem.is_lc_bank1());
        assert!(!mem.is_lc_write_prequalified());
        assert_eq!(mem.read_source(13), BankSource::Rom(0));
        assert_eq!(mem.write_source(15), BankSource::WriteSink(2));
        assert_eq!(mem.read_source(12), BankSource::Ram(12));
    }

    #[test]
    fn test_bank_maps_follow_lc_state() {
        let mut mem = Apple2Memory::new();

        mem.set_lc_read_enabled(true);
        mem.set_lc_bank1(false);
        assert_eq!(mem.read_source(13), BankSource::LcBank2);
        assert_eq!(mem.read_source(14), BankSource::Ram(14));
        assert_eq!(mem.write_source(13), BankSource::WriteSink(0));

        mem.set_lc_write_enabled(true);
        assert_eq!(mem.write_source(13), BankSource::LcBank2);
        assert_eq!(mem.write_source(15), BankSource::Ram(15));
    }

    #[test]
    fn test_rom_visible_while_read_disabled() {
        let mut mem = Apple2Memory::new();
        let rom = patterned_rom();
        mem.load_rom(&rom).unwrap();

        assert_eq!(mem.read_bus().read(0xD000), rom[0]);
        assert_eq!(mem.read_bus().read(0xFFFF), rom[ROM_SIZE - 1]);
    }

    #[test]
    fn test_load_rom_wrong_size_keeps_previous_image() {
        let mut mem = Apple2Memory::new();
        let rom = patterned_rom();
        mem.load_rom(&rom).unwrap();

        let err = mem.load_rom(&[0xFF; 4096]).unwrap_err();
        assert!(matches!(
            err,
            EmulatorError::RomSizeMismatch {
                expected: ROM_SIZE,
                actual: 4096
            }
        ));
        assert_eq!(mem.read_bus().read(0xE123), rom[0x1123]);
    }

    #[test]
    fn test_writes_discarded_while_write_disabled() {
        let mut mem = Apple2Memory::new();
        mem.set_lc_read_enabled(true);

        mem.write_bus().write(0xE000, 0x99);
        assert_eq!(mem.read_bus().read(0xE000), 0x00);
    }

    #[test]
    fn test_lc_banks_are_independent() {
        let mut mem = Apple2Memory::new();
        mem.set_lc_read_enabled(true);
        mem.set_lc_write_enabled(true);

        mem.write_bus().write(0xD010, 0x11);
        mem.set_lc_bank1(false);
        mem.write_bus().write(0xD010, 0x22);

        assert_eq!(mem.read_bus().read(0xD010), 0x22);
        mem.set_lc_bank1(true);
        assert_eq!(mem.read_bus().read(0xD010), 0x11);
    }

    #[test]
    fn test_reset_preserves_rom() {
        let mut mem = Apple2Memory::new();
        let rom = patterned_rom();
        mem.load_rom(&rom).unwrap();
        mem.write_bus().write(0x0800, 0x77);
        mem.set_lc_read_enabled(true);
        mem.set_lc_bank1(false);

        mem.reset();

        assert_eq!(mem.read_bus().read(0x0800), 0x00);
        assert_eq!(mem.lc_state(), LanguageCardState::default());
        assert_eq!(mem.read_bus().read(0xD000), rom[0]);
    }

    #[test]
    fn test_soft_switch_outside_page_is_ignored() {
        let mut mem = Apple2Memory::new();

        assert!(!mem.apply_soft_switch(0xC07F, true));
        assert!(!mem.apply_soft_switch(0xC090, true));
        assert_eq!(mem.lc_state(), LanguageCardState::default());
    }

    #[test]
    fn test_soft_switch_c080_read() {
        let mut mem = Apple2Memory::new();

        assert!(mem.apply_soft_switch(0xC080, true));
        assert!(mem.is_lc_read_enabled());
        assert!(!mem.is_lc_write_enabled());
        assert!(!mem.is_lc_bank1());
    }

    #[test]
    fn test_soft_switch_c08b_double_read_enables_write() {
        let mut mem = Apple2Memory::new();

        mem.apply_soft_switch(0xC08B, true);
        assert!(mem.is_lc_write_prequalified());
        assert!(!mem.is_lc_write_enabled());

        mem.apply_soft_switch(0xC08B, true);
        assert!(mem.is_lc_write_enabled());
        assert!(mem.is_lc_write_prequalified());
        assert!(mem.is_lc_read_enabled());
        assert!(mem.is_lc_bank1());
    }

    #[test]
    fn test_soft_switch_write_access_clears_latch() {
        let mut mem = Apple2Memory::new();

        mem.apply_soft_switch(0xC081, true);
        mem.apply_soft_switch(0xC081, false);
        assert!(!mem.is_lc_write_prequalified());

        mem.apply_soft_switch(0xC081, true);
        assert!(!mem.is_lc_write_enabled());
    }

    #[test]
    fn test_write_access_to_candidate_keeps_write_enabled() {
        let mut mem = Apple2Memory::new();
        mem.apply_soft_switch(0xC083, true);
        mem.apply_soft_switch(0xC083, true);
        assert!(mem.is_lc_write_enabled());

        mem.apply_soft_switch(0xC083, false);
        assert!(mem.is_lc_write_enabled());
        assert!(!mem.is_lc_write_prequalified());
    }

    #[test]
    fn test_non_candidate_write_access_disables_write() {
        let mut mem = Apple2Memory::new();
        mem.set_lc_write_enabled(true);

        mem.apply_soft_switch(0xC08A, false);
        assert!(!mem.is_lc_write_enabled());
        assert!(!mem.is_lc_read_enabled());
        assert!(mem.is_lc_bank1());
    }
}
