//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the complete processor state: architectural
//! registers, the address-bus and data-bus latches shared between
//! sub-cycles, the in-flight instruction record, the cycle and retirement
//! counters, and the address-space map.
//!
//! ## Execution model
//!
//! [`CPU::tick`] advances exactly one bus cycle. One host call per cycle
//! is the contract that lets the surrounding machine clock video, audio
//! and timers in lock-step with the CPU: a four-cycle instruction is
//! observed as exactly four `tick` calls (five when an indexed read
//! crosses a page).
//!
//! Within an instruction, the addressing-mode machine owns the early
//! sub-cycles and the micro-op the later ones. On the terminal ("T+1")
//! sub-cycle the next opcode is fetched on the same bus cycle the current
//! instruction retires, which is how the real part overlaps fetch with
//! execution.

use std::cell::RefCell;
use std::rc::Rc;

use crate::addressing;
use crate::instructions;
use crate::memory::{AddressSpace, MmioDevice, RamBank};
use crate::opcodes::{Instruction, Uop, OPCODE_TABLE};
use crate::status;

/// Ricoh 2A03 processor state and execution context.
///
/// A `CPU` is a plain value with no global state; independent instances
/// can coexist. The expected lifecycle is: create, map at least one region
/// covering the reset vector, [`reset`](CPU::reset), then drive with
/// [`tick`](CPU::tick).
///
/// # Examples
///
/// ```
/// use rp2a03::{CPU, RamBank};
///
/// let ram = RamBank::new(0x10000);
/// ram.load_bytes(0x0000, &[0xA9, 0x42, 0x02]); // LDA #$42; JAM
/// // The reset vector at 0xFFFC/0xFFFD is zero, pointing at the program.
///
/// let mut cpu = CPU::new();
/// cpu.map_ram_region(0x0000, ram);
/// cpu.reset();
///
/// while !cpu.is_halted() {
///     cpu.tick();
/// }
///
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.total_retired(), 2);
/// ```
pub struct CPU {
    /// Program counter.
    pub(crate) pc: u16,

    /// Address-bus latch; holds the effective address once latched, and
    /// doubles as scratch while absolute/indirect modes assemble it.
    pub(crate) ab: u16,

    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Status register. Bit 5 (U) stays set after reset; bit 4 (B) is
    /// never stored here, only synthesised into pushed bytes.
    pub(crate) p: u8,

    /// Stack pointer; the stack occupies `0x0100 | sp`.
    pub(crate) sp: u8,

    /// Data-bus scratch carried between sub-cycles (zero-page pointers,
    /// read-modify-write operands).
    pub(crate) db: u8,

    /// Set by KIL/JAM; absorbs all further ticks.
    pub(crate) halted: bool,

    /// The instruction currently on the bus.
    pub(crate) instr: Instruction,

    /// Bus cycles consumed since reset.
    pub(crate) cycle: u64,

    /// Instructions retired since reset.
    pub(crate) total_retired: u64,

    /// Physical address space.
    pub(crate) bus: AddressSpace,
}

impl CPU {
    /// Creates a CPU with zeroed state and an empty address space.
    ///
    /// The result is inert until regions are mapped and
    /// [`reset`](CPU::reset) is called.
    pub fn new() -> Self {
        Self {
            pc: 0,
            ab: 0,
            a: 0,
            x: 0,
            y: 0,
            p: 0,
            sp: 0,
            db: 0,
            halted: false,
            instr: Instruction::power_on(),
            cycle: 0,
            total_retired: 0,
            bus: AddressSpace::new(),
        }
    }

    /// Maps `ram` at `base`. Map regions before the first `reset`; regions
    /// cannot be removed.
    ///
    /// # Panics
    ///
    /// Panics on an empty bank, a region extending past 0xFFFF, overlap
    /// with an existing region, or a full region table.
    pub fn map_ram_region(&mut self, base: u16, ram: RamBank) {
        self.bus.map_ram(base, ram);
    }

    /// Maps an MMIO `device` at `base` covering `size` bytes. The device
    /// sees offsets relative to `base`. Map regions before the first
    /// `reset`.
    ///
    /// # Panics
    ///
    /// As for [`CPU::map_ram_region`].
    pub fn map_mmio_region(&mut self, base: u16, size: u32, device: Rc<RefCell<dyn MmioDevice>>) {
        self.bus.map_mmio(base, size, device);
    }

    /// Resets the processor.
    ///
    /// Loads `pc` from the little-endian reset vector at 0xFFFC/0xFFFD,
    /// sets `sp` to 0xFD, the status register to I|U, clears the halt
    /// latch, and prefetches the first opcode. A, X and Y survive reset.
    ///
    /// The cycle counter restarts at 8: the hardware spends about seven
    /// cycles on the reset sequence, rounded up here to fold in the
    /// prefetch.
    ///
    /// # Panics
    ///
    /// Panics if the reset vector or its target is unmapped, or the first
    /// opcode is unimplemented.
    pub fn reset(&mut self) {
        let lo = self.bus.load(0xFFFC) as u16;
        let hi = self.bus.load(0xFFFD) as u16;
        self.pc = hi << 8 | lo;
        self.sp = 0xFD;
        self.p = status::I | status::U;
        self.halted = false;

        self.cycle = 8;
        self.total_retired = 0;
        self.instr = self.fetch_next_instr();
    }

    /// Advances the processor by one bus cycle.
    ///
    /// Returns `true` when an instruction retired on this cycle. A halted
    /// CPU returns `false` and mutates nothing.
    ///
    /// # Panics
    ///
    /// Panics on contract violations: an access to an unmapped address, or
    /// fetching an opcode with no decode entry.
    pub fn tick(&mut self) -> bool {
        if self.halted {
            return false;
        }

        let mut retired = false;

        // Addressing runs until the effective address latches; Implicit
        // and Immediate finish without consuming the cycle and fall
        // through to the micro-op.
        if self.instr.address_latched || addressing::step(self) {
            if self.instr_is_tplus() {
                // Terminal cycle: fetch the next opcode on the same bus
                // cycle the current instruction completes.
                self.instr = self.fetch_next_instr();
                self.total_retired += 1;
                retired = true;
            } else {
                instructions::execute(self);
                if self.halted {
                    // HLT retires on the cycle that wedges the CPU.
                    self.total_retired += 1;
                    retired = true;
                }
            }
        }

        self.cycle += 1;
        if !retired {
            self.instr.cycle += 1;
        }

        retired
    }

    /// Ticks until the current instruction retires; returns the bus cycles
    /// consumed. Returns 0 immediately when halted.
    pub fn step(&mut self) -> u64 {
        if self.halted {
            return 0;
        }

        let start = self.cycle;
        while !self.tick() {}
        self.cycle - start
    }

    /// Ticks until at least `budget` cycles have elapsed or the CPU halts;
    /// returns the cycles consumed.
    pub fn run_for_cycles(&mut self, budget: u64) -> u64 {
        let start = self.cycle;
        while self.cycle - start < budget && !self.halted {
            self.tick();
        }
        self.cycle - start
    }

    /// Returns `true` once a KIL/JAM opcode has wedged the processor.
    /// Only [`reset`](CPU::reset) clears the condition.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Reads a byte through the address space without consuming cycles.
    /// Host/test inspection only.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is unmapped.
    pub fn load(&self, addr: u16) -> u8 {
        self.bus.load(addr)
    }

    /// Writes a byte through the address space without consuming cycles.
    /// Host/test inspection only.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is unmapped.
    pub fn store(&mut self, addr: u16, value: u8) {
        self.bus.store(addr, value);
    }

    // ========== Introspection ==========

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter. After reset this already points past the
    /// prefetched first opcode.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Address-bus latch.
    pub fn ab(&self) -> u16 {
        self.ab
    }

    /// Stack pointer. The full stack address is `0x0100 | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Status register as a packed byte (N V U B D I Z C, bit 7 to 0).
    pub fn status(&self) -> u8 {
        self.p
    }

    /// Bus cycles consumed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycle
    }

    /// Instructions retired since reset.
    pub fn total_retired(&self) -> u64 {
        self.total_retired
    }

    /// True if the negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p & status::N != 0
    }

    /// True if the overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p & status::V != 0
    }

    /// True if the decimal flag is set.
    pub fn flag_d(&self) -> bool {
        self.p & status::D != 0
    }

    /// True if the interrupt-disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p & status::I != 0
    }

    /// True if the zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p & status::Z != 0
    }

    /// True if the carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p & status::C != 0
    }

    // ========== Setters (test scaffolding) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the packed status register.
    pub fn set_status(&mut self, value: u8) {
        self.p = value;
    }

    /// Sets the carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        if value {
            self.p |= status::C;
        } else {
            self.p &= !status::C;
        }
    }

    // ========== Internals shared with the addressing engine and uops ==========

    /// Reads the byte at `pc` and advances `pc`.
    pub(crate) fn fetch_pc(&mut self) -> u8 {
        let value = self.bus.load(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Fetches and decodes the opcode at `pc`.
    ///
    /// # Panics
    ///
    /// Panics if the opcode has no decode entry.
    pub(crate) fn fetch_next_instr(&mut self) -> Instruction {
        let at = self.pc;
        let opcode = self.fetch_pc();
        match &OPCODE_TABLE[opcode as usize] {
            Some(metadata) => Instruction::begin(metadata),
            None => panic!("unimplemented opcode 0x{:02X} at 0x{:04X}", opcode, at),
        }
    }

    /// Latches the effective address; the micro-op may run from here on.
    pub(crate) fn latch_address(&mut self, addr: u16) {
        self.ab = addr;
        self.instr.address_latched = true;
    }

    /// True on the terminal sub-cycle, where retirement and the next fetch
    /// overlap. HLT never reaches a T+ stage.
    pub(crate) fn instr_is_tplus(&self) -> bool {
        self.instr.uop != Uop::Hlt && self.instr.cycle + 1 == self.instr.ncycles
    }

    /// Decides whether indexing `base` by `index` inserts a delay cycle:
    /// always for indexed stores/RMW, and on an actual page cross for the
    /// read-style ops, whose cycle budget grows by one here.
    pub(crate) fn should_stall(&mut self, base: u16, index: u8) -> bool {
        if self.instr.always_stall {
            return true;
        }

        // (!base & 0xFF) < index is exactly "base_low + index carries".
        if self.instr.xpage_stall && (!base & 0x00FF) < index as u16 {
            self.instr.ncycles += 1;
            return true;
        }

        false
    }

    /// Replaces the `mask` bits of the status register with `value`.
    pub(crate) fn change_flags(&mut self, mask: u8, value: u8) {
        self.p = (self.p & !mask) | value;
    }

    /// Updates Z and N from `value`, leaving every other flag untouched.
    pub(crate) fn set_value_flags(&mut self, value: u8) {
        let z = if value == 0 { status::Z } else { 0 };
        self.change_flags(status::Z | status::N, z | (value & status::N));
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
