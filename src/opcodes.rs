//! # Opcode Decode Table
//!
//! The 256-entry table mapping opcode bytes to instruction descriptors is
//! the single source of truth for what this CPU executes: micro-op,
//! addressing mode, base cycle count, and the indexed-stall flags.
//!
//! The table is sparse. Entries left at `None` are opcodes this revision
//! does not implement; fetching one is a fatal host/ROM error, with the
//! exception of the twelve KIL/JAM encodings, which are real entries that
//! halt the processor.

use crate::addressing::AddressingMode;

/// Micro-operation executed once the addressing mode has done its work.
///
/// A closed enumeration so that executor dispatch is checked for
/// exhaustiveness at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uop {
    /// No operation.
    Nop,
    /// KIL/JAM: halt the processor.
    Hlt,
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Pha,
    Pla,
    Php,
    Plp,
    Dec,
    Dex,
    Dey,
    Inc,
    Inx,
    Iny,
    Adc,
    Sbc,
    And,
    Eor,
    Ora,
    Asl,
    Lsr,
    Rol,
    Ror,
    Clc,
    /// Fatal when executed: no decimal mode on the 2A03.
    Cld,
    Cli,
    Clv,
    Sec,
    /// Fatal when executed: no decimal mode on the 2A03.
    Sed,
    Sei,
}

/// Static decode metadata for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Micro-op to execute.
    pub uop: Uop,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Cycle count before any page-cross penalty.
    pub base_cycles: u8,

    /// Read-style indexed op: +1 cycle only when the index carry crosses a
    /// page boundary.
    pub xpage_stall: bool,

    /// Indexed store or indexed read-modify-write: the extra indexing
    /// cycle is always paid and already counted in `base_cycles`.
    pub always_stall: bool,
}

/// In-flight state of the instruction currently on the bus.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Instruction {
    pub(crate) uop: Uop,
    pub(crate) mode: AddressingMode,

    /// Current sub-cycle, 0-based.
    pub(crate) cycle: u8,

    /// Total sub-cycles this instruction takes; grows by one when an
    /// xpage-stall op actually crosses a page.
    pub(crate) ncycles: u8,

    /// The effective address is in `ab` and the uop may run.
    pub(crate) address_latched: bool,

    pub(crate) xpage_stall: bool,
    pub(crate) always_stall: bool,
}

// The in-flight record rides in the CPU state; keep it register-sized.
const _: () = assert!(std::mem::size_of::<Instruction>() <= 8);

impl Instruction {
    /// Starts executing the instruction described by `metadata`.
    pub(crate) fn begin(metadata: &OpcodeMetadata) -> Self {
        Self {
            uop: metadata.uop,
            mode: metadata.addressing_mode,
            cycle: 0,
            ncycles: metadata.base_cycles,
            address_latched: false,
            xpage_stall: metadata.xpage_stall,
            always_stall: metadata.always_stall,
        }
    }

    /// Placeholder state between `CPU::new` and the first `reset`, which
    /// replaces it with the first real fetch.
    pub(crate) fn power_on() -> Self {
        Self {
            uop: Uop::Nop,
            mode: AddressingMode::Implicit,
            cycle: 0,
            ncycles: 2,
            address_latched: false,
            xpage_stall: false,
            always_stall: false,
        }
    }
}

const fn op(uop: Uop, mode: AddressingMode, base_cycles: u8) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        uop,
        addressing_mode: mode,
        base_cycles,
        xpage_stall: false,
        always_stall: false,
    })
}

const fn op_xpage(uop: Uop, mode: AddressingMode, base_cycles: u8) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        uop,
        addressing_mode: mode,
        base_cycles,
        xpage_stall: true,
        always_stall: false,
    })
}

const fn op_always(uop: Uop, mode: AddressingMode, base_cycles: u8) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        uop,
        addressing_mode: mode,
        base_cycles,
        xpage_stall: false,
        always_stall: true,
    })
}

/// The decode table, indexed by opcode byte.
///
/// `None` marks an opcode this revision does not implement; fetching it
/// aborts. Cycle counts are the documented NMOS 6502 timings.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Uop::*;

    let mut t: [Option<OpcodeMetadata>; 256] = [None; 256];

    t[0xEA] = op(Nop, Implicit, 2);

    // The twelve undocumented KIL/JAM encodings. One cycle: the fetch that
    // decodes them is the last thing the processor ever does.
    t[0x02] = op(Hlt, Implicit, 1);
    t[0x12] = op(Hlt, Implicit, 1);
    t[0x22] = op(Hlt, Implicit, 1);
    t[0x32] = op(Hlt, Implicit, 1);
    t[0x42] = op(Hlt, Implicit, 1);
    t[0x52] = op(Hlt, Implicit, 1);
    t[0x62] = op(Hlt, Implicit, 1);
    t[0x72] = op(Hlt, Implicit, 1);
    t[0x92] = op(Hlt, Implicit, 1);
    t[0xB2] = op(Hlt, Implicit, 1);
    t[0xD2] = op(Hlt, Implicit, 1);
    t[0xF2] = op(Hlt, Implicit, 1);

    t[0xA9] = op(Lda, Immediate, 2);
    t[0xA5] = op(Lda, ZeroPage, 3);
    t[0xB5] = op(Lda, ZeroPageX, 4);
    t[0xAD] = op(Lda, Absolute, 4);
    t[0xBD] = op_xpage(Lda, AbsoluteX, 4);
    t[0xB9] = op_xpage(Lda, AbsoluteY, 4);
    t[0xA1] = op(Lda, IndirectX, 6);
    t[0xB1] = op_xpage(Lda, IndirectY, 5);

    t[0xA2] = op(Ldx, Immediate, 2);
    t[0xA6] = op(Ldx, ZeroPage, 3);
    t[0xB6] = op(Ldx, ZeroPageY, 4);
    t[0xAE] = op(Ldx, Absolute, 4);
    t[0xBE] = op_xpage(Ldx, AbsoluteY, 4);

    t[0xA0] = op(Ldy, Immediate, 2);
    t[0xA4] = op(Ldy, ZeroPage, 3);
    t[0xB4] = op(Ldy, ZeroPageX, 4);
    t[0xAC] = op(Ldy, Absolute, 4);
    t[0xBC] = op_xpage(Ldy, AbsoluteX, 4);

    t[0x85] = op(Sta, ZeroPage, 3);
    t[0x95] = op(Sta, ZeroPageX, 4);
    t[0x8D] = op(Sta, Absolute, 4);
    t[0x9D] = op_always(Sta, AbsoluteX, 5);
    t[0x99] = op_always(Sta, AbsoluteY, 5);
    t[0x81] = op(Sta, IndirectX, 6);
    t[0x91] = op_always(Sta, IndirectY, 6);

    t[0x86] = op(Stx, ZeroPage, 3);
    t[0x96] = op(Stx, ZeroPageY, 4);
    t[0x8E] = op(Stx, Absolute, 4);

    t[0x84] = op(Sty, ZeroPage, 3);
    t[0x94] = op(Sty, ZeroPageX, 4);
    t[0x8C] = op(Sty, Absolute, 4);

    t[0xAA] = op(Tax, Implicit, 2);
    t[0xA8] = op(Tay, Implicit, 2);
    t[0xBA] = op(Tsx, Implicit, 2);
    t[0x8A] = op(Txa, Implicit, 2);
    t[0x9A] = op(Txs, Implicit, 2);
    t[0x98] = op(Tya, Implicit, 2);

    t[0x48] = op(Pha, Implicit, 3);
    t[0x68] = op(Pla, Implicit, 4);
    t[0x08] = op(Php, Implicit, 3);
    t[0x28] = op(Plp, Implicit, 4);

    t[0xC6] = op(Dec, ZeroPage, 5);
    t[0xD6] = op(Dec, ZeroPageX, 6);
    t[0xCE] = op(Dec, Absolute, 6);
    t[0xDE] = op_always(Dec, AbsoluteX, 7);
    t[0xCA] = op(Dex, Implicit, 2);
    t[0x88] = op(Dey, Implicit, 2);

    t[0xE6] = op(Inc, ZeroPage, 5);
    t[0xF6] = op(Inc, ZeroPageX, 6);
    t[0xEE] = op(Inc, Absolute, 6);
    t[0xFE] = op_always(Inc, AbsoluteX, 7);
    t[0xE8] = op(Inx, Implicit, 2);
    t[0xC8] = op(Iny, Implicit, 2);

    t[0x69] = op(Adc, Immediate, 2);
    t[0x65] = op(Adc, ZeroPage, 3);
    t[0x75] = op(Adc, ZeroPageX, 4);
    t[0x6D] = op(Adc, Absolute, 4);
    t[0x7D] = op_xpage(Adc, AbsoluteX, 4);
    t[0x79] = op_xpage(Adc, AbsoluteY, 4);
    t[0x61] = op(Adc, IndirectX, 6);
    t[0x71] = op_xpage(Adc, IndirectY, 5);

    t[0xE9] = op(Sbc, Immediate, 2);
    t[0xE5] = op(Sbc, ZeroPage, 3);
    t[0xF5] = op(Sbc, ZeroPageX, 4);
    t[0xED] = op(Sbc, Absolute, 4);
    t[0xFD] = op_xpage(Sbc, AbsoluteX, 4);
    t[0xF9] = op_xpage(Sbc, AbsoluteY, 4);
    t[0xE1] = op(Sbc, IndirectX, 6);
    t[0xF1] = op_xpage(Sbc, IndirectY, 5);

    t[0x29] = op(And, Immediate, 2);
    t[0x25] = op(And, ZeroPage, 3);
    t[0x35] = op(And, ZeroPageX, 4);
    t[0x2D] = op(And, Absolute, 4);
    t[0x3D] = op_xpage(And, AbsoluteX, 4);
    t[0x39] = op_xpage(And, AbsoluteY, 4);
    t[0x21] = op(And, IndirectX, 6);
    t[0x31] = op_xpage(And, IndirectY, 5);

    t[0x49] = op(Eor, Immediate, 2);
    t[0x45] = op(Eor, ZeroPage, 3);
    t[0x55] = op(Eor, ZeroPageX, 4);
    t[0x4D] = op(Eor, Absolute, 4);
    t[0x5D] = op_xpage(Eor, AbsoluteX, 4);
    t[0x59] = op_xpage(Eor, AbsoluteY, 4);
    t[0x41] = op(Eor, IndirectX, 6);
    t[0x51] = op_xpage(Eor, IndirectY, 5);

    t[0x09] = op(Ora, Immediate, 2);
    t[0x05] = op(Ora, ZeroPage, 3);
    t[0x15] = op(Ora, ZeroPageX, 4);
    t[0x0D] = op(Ora, Absolute, 4);
    t[0x1D] = op_xpage(Ora, AbsoluteX, 4);
    t[0x19] = op_xpage(Ora, AbsoluteY, 4);
    t[0x01] = op(Ora, IndirectX, 6);
    t[0x11] = op_xpage(Ora, IndirectY, 5);

    t[0x0A] = op(Asl, Implicit, 2);
    t[0x06] = op(Asl, ZeroPage, 5);
    t[0x16] = op(Asl, ZeroPageX, 6);
    t[0x0E] = op(Asl, Absolute, 6);
    t[0x1E] = op_always(Asl, AbsoluteX, 7);

    t[0x4A] = op(Lsr, Implicit, 2);
    t[0x46] = op(Lsr, ZeroPage, 5);
    t[0x56] = op(Lsr, ZeroPageX, 6);
    t[0x4E] = op(Lsr, Absolute, 6);
    t[0x5E] = op_always(Lsr, AbsoluteX, 7);

    t[0x2A] = op(Rol, Implicit, 2);
    t[0x26] = op(Rol, ZeroPage, 5);
    t[0x36] = op(Rol, ZeroPageX, 6);
    t[0x2E] = op(Rol, Absolute, 6);
    t[0x3E] = op_always(Rol, AbsoluteX, 7);

    t[0x6A] = op(Ror, Implicit, 2);
    t[0x66] = op(Ror, ZeroPage, 5);
    t[0x76] = op(Ror, ZeroPageX, 6);
    t[0x6E] = op(Ror, Absolute, 6);
    t[0x7E] = op_always(Ror, AbsoluteX, 7);

    t[0x18] = op(Clc, Implicit, 2);
    t[0xD8] = op(Cld, Implicit, 2);
    t[0x58] = op(Cli, Implicit, 2);
    t[0xB8] = op(Clv, Implicit, 2);
    t[0x38] = op(Sec, Implicit, 2);
    t[0xF8] = op(Sed, Implicit, 2);
    t[0x78] = op(Sei, Implicit, 2);

    t
}
