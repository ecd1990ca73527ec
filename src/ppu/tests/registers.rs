// PPU register behavior tests

use crate::ppu::Ppu;

#[test]
fn test_status_read_clears_vblank() {
    let mut ppu = Ppu::new();
    ppu.ppustatus = 0xE0;

    let status = ppu.cpu_read(2);
    assert_eq!(status, 0xE0, "First read returns the flags as they were");
    assert_eq!(
        ppu.ppustatus & 0x80,
        0,
        "Vblank bit must clear after the read"
    );
    assert_eq!(
        ppu.ppustatus & 0x60,
        0x60,
        "Sprite bits survive a status read"
    );
}

#[test]
fn test_status_read_resets_write_latch() {
    let mut ppu = Ppu::new();

    ppu.cpu_write(6, 0x21); // first PPUADDR write arms the latch
    ppu.cpu_read(2);
    ppu.cpu_write(6, 0x23);
    ppu.cpu_write(6, 0x05);

    assert_eq!(
        ppu.v, 0x2305,
        "After a status read the next PPUADDR write is a fresh high byte"
    );
}

#[test]
fn test_status_peek_has_no_side_effects() {
    let mut ppu = Ppu::new();
    ppu.ppustatus = 0x80;
    ppu.write_latch = true;

    let status = ppu.cpu_peek(2);

    assert_eq!(status, 0x80);
    assert_eq!(ppu.ppustatus, 0x80, "Peek must not clear vblank");
    assert!(ppu.write_latch, "Peek must not reset the write latch");
}

#[test]
fn test_ppuaddr_two_writes_set_v() {
    let mut ppu = Ppu::new();

    ppu.cpu_write(6, 0x21);
    ppu.cpu_write(6, 0x08);

    assert_eq!(ppu.v, 0x2108);
}

#[test]
fn test_ppudata_read_is_buffered() {
    let mut ppu = Ppu::new();
    ppu.ppu_write(0x2005, 0x55);

    ppu.cpu_write(6, 0x20);
    ppu.cpu_write(6, 0x05);

    let first = ppu.cpu_read(7);
    // Address moved on; point back for the buffered value
    ppu.cpu_write(6, 0x20);
    ppu.cpu_write(6, 0x05);
    let second = ppu.cpu_read(7);

    assert_eq!(first, 0x00, "First PPUDATA read returns the stale buffer");
    assert_eq!(second, 0x55, "Second read returns the byte fetched before");
}

#[test]
fn test_ppudata_palette_read_is_immediate() {
    let mut ppu = Ppu::new();
    ppu.ppu_write(0x3F01, 0x2A);

    ppu.cpu_write(6, 0x3F);
    ppu.cpu_write(6, 0x01);

    assert_eq!(
        ppu.cpu_read(7),
        0x2A,
        "Palette reads bypass the read buffer"
    );
}

#[test]
fn test_ppudata_increment_across() {
    let mut ppu = Ppu::new();
    ppu.cpu_write(0, 0x00); // +1 mode
    ppu.cpu_write(6, 0x20);
    ppu.cpu_write(6, 0x00);

    ppu.cpu_write(7, 0x11);
    ppu.cpu_write(7, 0x22);

    assert_eq!(ppu.ppu_read(0x2000), 0x11);
    assert_eq!(ppu.ppu_read(0x2001), 0x22);
}

#[test]
fn test_ppudata_increment_down() {
    let mut ppu = Ppu::new();
    ppu.cpu_write(0, 0x04); // +32 mode
    ppu.cpu_write(6, 0x20);
    ppu.cpu_write(6, 0x00);

    ppu.cpu_write(7, 0x11);
    ppu.cpu_write(7, 0x22);

    assert_eq!(ppu.ppu_read(0x2000), 0x11);
    assert_eq!(ppu.ppu_read(0x2020), 0x22, "+32 step writes one row down");
}

#[test]
fn test_ppudata_peek_does_not_advance() {
    let mut ppu = Ppu::new();
    ppu.cpu_write(6, 0x20);
    ppu.cpu_write(6, 0x00);

    let v_before = ppu.v;
    ppu.cpu_peek(7);
    assert_eq!(ppu.v, v_before, "Peeking PPUDATA must not move v");
}

#[test]
fn test_oam_port_round_trip() {
    let mut ppu = Ppu::new();

    ppu.cpu_write(3, 0x10); // OAMADDR
    ppu.cpu_write(4, 0xAB); // OAMDATA, address auto-increments
    ppu.cpu_write(4, 0xCD);

    ppu.cpu_write(3, 0x10);
    assert_eq!(ppu.cpu_read(4), 0xAB);
    ppu.cpu_write(3, 0x11);
    assert_eq!(ppu.cpu_read(4), 0xCD);
}

#[test]
fn test_write_only_registers_read_zero() {
    let mut ppu = Ppu::new();
    ppu.cpu_write(0, 0xFF);
    ppu.cpu_write(1, 0xFF);

    assert_eq!(ppu.cpu_read(0), 0, "PPUCTRL is write-only");
    assert_eq!(ppu.cpu_read(1), 0, "PPUMASK is write-only");
    assert_eq!(ppu.cpu_read(3), 0, "OAMADDR is write-only");
}

#[test]
fn test_enabling_nmi_during_vblank_raises_latch() {
    let mut ppu = Ppu::new();
    ppu.ppustatus = 0x80; // already in vblank

    ppu.cpu_write(0, 0x80);

    assert!(
        ppu.take_nmi(),
        "Turning on PPUCTRL bit 7 mid-vblank must raise the NMI latch"
    );
    assert!(!ppu.take_nmi(), "The latch is one-shot");
}
