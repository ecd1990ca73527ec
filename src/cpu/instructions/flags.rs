// Flag set/clear instructions

use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// CLC - Clear Carry
    pub fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// CLD - Clear Decimal (stored only; the ALU ignores it)
    pub fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// CLI - Clear Interrupt Disable
    pub fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLV - Clear Overflow
    pub fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }

    /// SEC - Set Carry
    pub fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// SED - Set Decimal
    pub fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    /// SEI - Set Interrupt Disable
    pub fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags;
    use crate::cpu::Cpu;

    #[test]
    fn test_carry_pair() {
        let mut cpu = Cpu::new();

        cpu.sec();
        assert!(cpu.get_carry());
        cpu.clc();
        assert!(!cpu.get_carry());
    }

    #[test]
    fn test_interrupt_pair() {
        let mut cpu = Cpu::new();

        cpu.cli();
        assert!(!cpu.get_flag(flags::INTERRUPT_DISABLE));
        cpu.sei();
        assert!(cpu.get_flag(flags::INTERRUPT_DISABLE));
    }

    #[test]
    fn test_decimal_pair() {
        let mut cpu = Cpu::new();

        cpu.sed();
        assert!(cpu.get_flag(flags::DECIMAL));
        cpu.cld();
        assert!(!cpu.get_flag(flags::DECIMAL));
    }

    #[test]
    fn test_clv() {
        let mut cpu = Cpu::new();

        cpu.set_overflow(true);
        cpu.clv();
        assert!(!cpu.get_overflow());
    }
}
