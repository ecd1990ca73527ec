// PPU address space tests

use crate::cartridge::tests::build_ines;
use crate::cartridge::{Cartridge, Mirroring};
use crate::ppu::Ppu;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_horizontal_mirroring() {
    let mut ppu = Ppu::new();
    ppu.mirroring = Mirroring::Horizontal;

    ppu.ppu_write(0x2000, 0x11);
    ppu.ppu_write(0x2800, 0x22);

    assert_eq!(ppu.ppu_read(0x2400), 0x11, "$2400 mirrors $2000");
    assert_eq!(ppu.ppu_read(0x2C00), 0x22, "$2C00 mirrors $2800");
    assert_ne!(
        ppu.ppu_read(0x2000),
        ppu.ppu_read(0x2800),
        "Top and bottom tables are distinct"
    );
}

#[test]
fn test_vertical_mirroring() {
    let mut ppu = Ppu::new();
    ppu.mirroring = Mirroring::Vertical;

    ppu.ppu_write(0x2000, 0x11);
    ppu.ppu_write(0x2400, 0x22);

    assert_eq!(ppu.ppu_read(0x2800), 0x11, "$2800 mirrors $2000");
    assert_eq!(ppu.ppu_read(0x2C00), 0x22, "$2C00 mirrors $2400");
}

#[test]
fn test_one_screen_mirroring() {
    let mut ppu = Ppu::new();
    ppu.mirroring = Mirroring::OneScreenLo;

    ppu.ppu_write(0x2000, 0x33);
    assert_eq!(ppu.ppu_read(0x2400), 0x33);
    assert_eq!(ppu.ppu_read(0x2800), 0x33);
    assert_eq!(ppu.ppu_read(0x2C00), 0x33);

    ppu.mirroring = Mirroring::OneScreenHi;
    ppu.ppu_write(0x2000, 0x44);
    assert_eq!(
        ppu.ppu_read(0x2C00),
        0x44,
        "High single-screen maps every table to the second bank"
    );
}

#[test]
fn test_nametable_mirror_range() {
    let mut ppu = Ppu::new();

    ppu.ppu_write(0x2005, 0x77);
    assert_eq!(
        ppu.ppu_read(0x3005),
        0x77,
        "$3000-$3EFF mirrors the nametable range"
    );
}

#[test]
fn test_palette_mirroring() {
    let mut ppu = Ppu::new();

    ppu.ppu_write(0x3F00, 0x0F);
    assert_eq!(
        ppu.ppu_read(0x3F10),
        0x0F,
        "$3F10 is a mirror of the backdrop entry"
    );

    ppu.ppu_write(0x3F14, 0x21);
    assert_eq!(ppu.ppu_read(0x3F04), 0x21);

    ppu.ppu_write(0x3F20, 0x13);
    assert_eq!(
        ppu.ppu_read(0x3F00),
        0x13,
        "Palette RAM repeats every 32 bytes"
    );
}

#[test]
fn test_pattern_fallback_without_cartridge() {
    let mut ppu = Ppu::new();

    ppu.ppu_write(0x0123, 0x5A);
    assert_eq!(
        ppu.ppu_read(0x0123),
        0x5A,
        "Internal pattern storage backs the window with no cartridge"
    );
}

#[test]
fn test_cartridge_claims_pattern_window() {
    let mut ppu = Ppu::new();
    let image = build_ines(1, 0, 0x00, &[]); // CHR-RAM board
    let cart = Rc::new(RefCell::new(Cartridge::from_ines_bytes(&image).unwrap()));
    ppu.connect_cartridge(cart.clone());

    ppu.ppu_write(0x0040, 0x99);

    assert_eq!(ppu.ppu_read(0x0040), 0x99);
    assert_eq!(
        cart.borrow().ppu_read(0x0040),
        Some(0x99),
        "The write must land in cartridge CHR-RAM, not the fallback"
    );
}

#[test]
fn test_mirroring_follows_cartridge() {
    let mut ppu = Ppu::new();
    let image = build_ines(1, 1, 0x01, &[]); // vertical bit set
    let cart = Rc::new(RefCell::new(Cartridge::from_ines_bytes(&image).unwrap()));
    ppu.connect_cartridge(cart);

    assert_eq!(ppu.mirroring, Mirroring::Vertical);
}

#[test]
fn test_colour_lookup() {
    let mut ppu = Ppu::new();
    ppu.ppu_write(0x3F00, 0x30);

    assert_eq!(
        ppu.colour_from_palette(0, 0),
        (236, 238, 236),
        "Palette entry resolves through the master colour table"
    );
}
