// Disassembler - pure textualization of an instruction stream
//
// Walks memory through the bus's side-effect-free peek path, so PPU status
// bits and latches survive being disassembled. Output formats are stable:
//
// ```text
// $8000: LDA #$0A {IMM}
// $8002: STA $0002 {ABS}
// $8005: BNE $FA [$8001] {REL}
// $8007: NOP  {IMP}
// ```

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::OPCODE_TABLE;
use std::collections::BTreeMap;

/// One decoded instruction
#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    /// Address of the opcode byte
    pub address: u16,

    /// The opcode itself
    pub opcode: u8,

    /// Table mnemonic; `???` for undocumented slots
    pub mnemonic: &'static str,

    /// Addressing mode, which fixes the operand formatting
    pub mode: AddressingMode,

    /// Operand bytes following the opcode (0-2 of them)
    pub operands: Vec<u8>,
}

impl DisassembledInstruction {
    /// Instruction length in bytes, opcode included
    pub fn length(&self) -> u8 {
        1 + self.operands.len() as u8
    }

    /// Operand portion of the listing line, tag included
    fn format_operands(&self) -> String {
        let lo = *self.operands.first().unwrap_or(&0);
        let hi = *self.operands.get(1).unwrap_or(&0);
        let word = ((hi as u16) << 8) | lo as u16;

        match self.mode {
            AddressingMode::Implied | AddressingMode::Accumulator => " {IMP}".to_string(),
            AddressingMode::Immediate => format!("#${:02X} {{IMM}}", lo),
            AddressingMode::ZeroPage => format!("${:02X} {{ZP0}}", lo),
            AddressingMode::ZeroPageX => format!("${:02X}, X {{ZPX}}", lo),
            AddressingMode::ZeroPageY => format!("${:02X}, Y {{ZPY}}", lo),
            AddressingMode::IndexedIndirect => format!("(${:02X}, X) {{IZX}}", lo),
            AddressingMode::IndirectIndexed => format!("(${:02X}, Y) {{IZY}}", lo),
            AddressingMode::Absolute => format!("${:04X} {{ABS}}", word),
            AddressingMode::AbsoluteX => format!("${:04X}, X {{ABX}}", word),
            AddressingMode::AbsoluteY => format!("${:04X}, Y {{ABY}}", word),
            AddressingMode::Indirect => format!("(${:04X}) {{IND}}", word),
            AddressingMode::Relative => {
                // Target measured from the PC after the operand
                let next = self.address.wrapping_add(2);
                let target = next.wrapping_add(lo as i8 as i16 as u16);
                format!("${:02X} [${:04X}] {{REL}}", lo, target)
            }
        }
    }
}

impl std::fmt::Display for DisassembledInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${:04X}: {} {}",
            self.address,
            self.mnemonic,
            self.format_operands()
        )
    }
}

/// Decode the single instruction at `addr`
pub fn disassemble_instruction(bus: &Bus, addr: u16) -> DisassembledInstruction {
    let opcode = bus.peek(addr);
    let info = &OPCODE_TABLE[opcode as usize];

    let mut operands = Vec::new();
    for i in 1..info.bytes {
        operands.push(bus.peek(addr.wrapping_add(i as u16)));
    }

    DisassembledInstruction {
        address: addr,
        opcode,
        mnemonic: info.mnemonic,
        mode: info.mode,
        operands,
    }
}

/// Disassemble `[start, stop]` into an address-keyed listing
///
/// Instructions are variable length, so the listing is keyed by the address
/// of each opcode byte; a debugger front-end finds the line for the current
/// PC by direct lookup.
pub fn disassemble_range(bus: &Bus, start: u16, stop: u16) -> BTreeMap<u16, String> {
    let mut listing = BTreeMap::new();
    let mut addr = start as u32;

    while addr <= stop as u32 {
        let instruction = disassemble_instruction(bus, addr as u16);
        listing.insert(addr as u16, instruction.to_string());
        addr += instruction.length() as u32;
    }

    listing
}
