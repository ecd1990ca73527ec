// NOP, BRK and RTI

use crate::bus::Bus;
use crate::cpu::flags;
use crate::cpu::vectors;
use crate::cpu::Cpu;

impl Cpu {
    /// NOP - No Operation
    pub fn nop(&mut self) {}

    /// BRK - Software Interrupt
    ///
    /// The byte after the opcode is padding; decode consumed it and BRK
    /// advances PC once more before pushing, so RTI resumes two bytes past
    /// the BRK. The pushed status carries B and U set to mark the software
    /// origin; the interrupt-disable flag sets and PC loads from
    /// $FFFE-$FFFF.
    pub fn brk(&mut self, bus: &mut Bus) {
        self.pc = self.pc.wrapping_add(1);
        self.stack_push_u16(bus, self.pc);

        let pushed = self.status | flags::BREAK | flags::UNUSED;
        self.stack_push(bus, pushed);
        self.set_flag(flags::INTERRUPT_DISABLE);

        let lo = bus.read(vectors::IRQ) as u16;
        let hi = bus.read(vectors::IRQ.wrapping_add(1)) as u16;
        self.pc = (hi << 8) | lo;
    }

    /// RTI - Return from Interrupt
    ///
    /// Pulls status (the stored B bit is discarded, U reads back as 1),
    /// then PC low and high.
    pub fn rti(&mut self, bus: &mut Bus) {
        let pulled = self.stack_pop(bus);
        self.status = (pulled & !flags::BREAK) | flags::UNUSED;

        self.pc = self.stack_pop_u16(bus);
    }
}
