// PPU timing tests

use crate::ppu::Ppu;

/// Dots in one full frame: 341 * 262
const DOTS_PER_FRAME: u32 = 341 * 262;

#[test]
fn test_counters_start_at_origin() {
    let ppu = Ppu::new();
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.cycle(), 0);
    assert!(!ppu.frame_complete());
}

#[test]
fn test_cycle_wraps_to_next_scanline() {
    let mut ppu = Ppu::new();

    for _ in 0..341 {
        ppu.tick();
    }

    assert_eq!(ppu.cycle(), 0);
    assert_eq!(ppu.scanline(), 1);
}

#[test]
fn test_vblank_rises_at_241_1() {
    let mut ppu = Ppu::new();

    // Run to scanline 241, dot 1
    for _ in 0..(241 * 341 + 1) {
        ppu.tick();
    }
    assert_eq!(ppu.ppustatus & 0x80, 0, "Vblank not set before dot 1 runs");

    ppu.tick();
    assert_eq!(ppu.scanline(), 241);
    assert_eq!(ppu.ppustatus & 0x80, 0x80, "Vblank sets at scanline 241 dot 1");
}

#[test]
fn test_nmi_latch_requires_ctrl_bit() {
    let mut ppu = Ppu::new();

    for _ in 0..DOTS_PER_FRAME {
        ppu.tick();
    }
    assert!(
        !ppu.take_nmi(),
        "No NMI when PPUCTRL bit 7 is off at vblank start"
    );

    ppu.cpu_write(0, 0x80);
    ppu.cpu_read(2); // clear vblank so the next frame has a clean edge
    for _ in 0..DOTS_PER_FRAME {
        ppu.tick();
    }
    assert!(ppu.take_nmi(), "NMI latch rises with PPUCTRL bit 7 enabled");
}

#[test]
fn test_frame_complete_at_end_of_260() {
    let mut ppu = Ppu::new();

    // Scanlines 0..=260 from power-on: 261 lines of 341 dots
    for _ in 0..(261 * 341 - 1) {
        ppu.tick();
    }
    assert!(!ppu.frame_complete());

    ppu.tick();
    assert!(ppu.frame_complete(), "Latch sets when scanline 260 ends");
    assert_eq!(ppu.scanline(), -1, "Wraps onto the pre-render line");
}

#[test]
fn test_frame_complete_is_a_latch() {
    let mut ppu = Ppu::new();

    for _ in 0..(261 * 341) {
        ppu.tick();
    }
    assert!(ppu.frame_complete());

    ppu.tick();
    assert!(ppu.frame_complete(), "Only the host clears the latch");

    ppu.clear_frame_complete();
    assert!(!ppu.frame_complete());
}

#[test]
fn test_vblank_clears_on_prerender_line() {
    let mut ppu = Ppu::new();

    // One full pass from power-on lands on the pre-render line
    for _ in 0..(261 * 341 + 2) {
        ppu.tick();
    }

    assert_eq!(ppu.scanline(), -1);
    assert_eq!(
        ppu.ppustatus & 0xE0,
        0,
        "Vblank and sprite flags clear on the pre-render line"
    );
}

#[test]
fn test_frame_counter_advances() {
    let mut ppu = Ppu::new();
    assert_eq!(ppu.frame(), 0);

    for _ in 0..(261 * 341) {
        ppu.tick();
    }
    assert_eq!(ppu.frame(), 1);
}
