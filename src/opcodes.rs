//! # Opcode Encoding
//!
//! Opcode constants for the LS-8 instruction set, plus the two decode
//! helpers the execution loop relies on.
//!
//! The instruction set is self-describing: bits 6-7 of every opcode byte
//! encode how many operand bytes follow it (0-3), so the fetch loop never
//! needs a per-instruction size table. The remaining structure of the byte
//! is not decoded further; the full value selects a handler by direct
//! dispatch-table lookup.
//!
//! The byte values below are the wire contract for LS-8 object files and
//! must not be changed. The single exception is `AND`: the reference
//! material assigns it the same byte as `ADD` (0xB3), which would make AND
//! unreachable through dispatch, so it carries the distinct value 0xB0
//! here.

/// NOP - no operation.
pub const NOP: u8 = 0x00;
/// HLT - halt the run.
pub const HLT: u8 = 0x01;
/// RET - pop the return address and resume there.
pub const RET: u8 = 0x09;
/// PRN - print a register as a decimal line.
pub const PRN: u8 = 0x43;
/// CALL - push the return address and jump to the address in a register.
pub const CALL: u8 = 0x48;
/// POP - pop the stack top into a register.
pub const POP: u8 = 0x4C;
/// PUSH - push a register onto the stack.
pub const PUSH: u8 = 0x4D;
/// NOT - bitwise complement of a register.
pub const NOT: u8 = 0x70;
/// INC - increment a register.
pub const INC: u8 = 0x78;
/// DEC - decrement a register.
pub const DEC: u8 = 0x79;
/// LDI - load an immediate value into a register.
pub const LDI: u8 = 0x99;
/// CMP - compare two registers, setting the Equal flag.
pub const CMP: u8 = 0xA0;
/// SUB - subtract registers.
pub const SUB: u8 = 0xA9;
/// MUL - multiply registers.
pub const MUL: u8 = 0xAA;
/// DIV - divide registers.
pub const DIV: u8 = 0xAB;
/// MOD - remainder of register division.
pub const MOD: u8 = 0xAC;
/// AND - bitwise AND of registers (0xB0; see module docs for the
/// deviation from the reference's colliding 0xB3).
pub const AND: u8 = 0xB0;
/// OR - bitwise OR of registers.
pub const OR: u8 = 0xB1;
/// XOR - bitwise XOR of registers.
pub const XOR: u8 = 0xB2;
/// ADD - add registers.
pub const ADD: u8 = 0xB3;

/// Returns the number of operand bytes declared by an opcode (0-3).
///
/// The count lives in bits 6-7 of the opcode byte, so it can be derived
/// for any byte value, known instruction or not.
///
/// # Examples
///
/// ```
/// use ls8::opcodes::{operand_count, HLT, LDI, PRN};
///
/// assert_eq!(operand_count(HLT), 0);
/// assert_eq!(operand_count(PRN), 1);
/// assert_eq!(operand_count(LDI), 2);
/// ```
pub fn operand_count(opcode: u8) -> u8 {
    (opcode >> 6) & 0b11
}

/// Returns the mnemonic for a known opcode, or `None` for a byte with no
/// dispatch-table entry.
///
/// # Examples
///
/// ```
/// use ls8::opcodes::{mnemonic, MUL};
///
/// assert_eq!(mnemonic(MUL), Some("MUL"));
/// assert_eq!(mnemonic(0xFF), None);
/// ```
pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    match opcode {
        NOP => Some("NOP"),
        HLT => Some("HLT"),
        RET => Some("RET"),
        PRN => Some("PRN"),
        CALL => Some("CALL"),
        POP => Some("POP"),
        PUSH => Some("PUSH"),
        NOT => Some("NOT"),
        INC => Some("INC"),
        DEC => Some("DEC"),
        LDI => Some("LDI"),
        CMP => Some("CMP"),
        SUB => Some("SUB"),
        MUL => Some("MUL"),
        DIV => Some("DIV"),
        MOD => Some("MOD"),
        AND => Some("AND"),
        OR => Some("OR"),
        XOR => Some("XOR"),
        ADD => Some("ADD"),
        _ => None,
    }
}
