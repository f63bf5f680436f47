//! KS0108B controller
//!
//! The 128x64 panel is driven by two KS0108B chips, each owning 64
//! columns of 8 pages. Pixels are changed with a read-modify-write of the
//! page byte over the data bus.
//!
//!     use glcd::{DisplayKind,Ks0108b,Ks0108bPanel,Lcd,PixelValue,Point};
//!
//!     let mut lcd = Lcd::new(DisplayKind::Small, Ks0108b::new(Ks0108bPanel::new())).unwrap();
//!     lcd.configure();
//!     lcd.draw_line(Point::new(60,0), Point::new(70,3), PixelValue::On);
//!     let fb = lcd.into_inner().into_inner().to_frame_buffer();
//!     assert_eq!(fb.lit_count(), 11);
//!

use log::trace;

use crate::Access;
use crate::Chip;
use crate::ControlLines;
use crate::Controller;
use crate::Coord;
use crate::DataBus;
use crate::FrameBuffer;
use crate::PixelSink;
use crate::PixelValue;
use crate::Register;
use crate::SplitPortBus;
use crate::buffer::PAGE_HEIGHT;

/// Panel width in pixels
pub const KS0108B_WIDTH : Coord = 128;
/// Panel height in pixels
pub const KS0108B_HEIGHT : Coord = 64;
/// Columns handled by one chip
pub const CHIP_COLUMNS : usize = 64;
/// Pages handled by one chip
pub const CHIP_PAGES : usize = 8;

/// Display on, low bit switches
pub const DISPLAY_ON : u8 = 0x3F;
/// Display off
pub const DISPLAY_OFF : u8 = 0x3E;
/// Set column address, or'ed with 0..63
pub const SET_Y : u8 = 0x40;
/// Set page address, or'ed with 0..7
pub const SET_PAGE : u8 = 0xB8;
/// Set display start line, or'ed with 0..63
pub const START_LINE : u8 = 0xC0;

/// Status: busy
pub const STATUS_BUSY : u8 = 0x80;
/// Status: display is off
pub const STATUS_OFF : u8 = 0x20;
/// Status: in reset
pub const STATUS_RESET : u8 = 0x10;

/// KS0108B driver over a data bus and its control lines
#[derive(Debug)]
pub struct Ks0108b<B> where B: DataBus + ControlLines {
    bus: B,
}

impl<B> Ks0108b<B> where B: DataBus + ControlLines {
    /// Create a new driver owning `bus`
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
    /// Underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
    /// Release the bus
    pub fn into_inner(self) -> B {
        self.bus
    }
    fn write(&mut self, chip: Chip, reg: Register, data: u8) {
        self.bus.select(chip);
        self.bus.register(reg);
        self.bus.access(Access::Write);
        self.bus.write_data(data);
        self.bus.enable(true);
        self.bus.enable(false);
    }
    fn read(&mut self, chip: Chip, reg: Register) -> u8 {
        self.bus.select(chip);
        self.bus.register(reg);
        self.bus.access(Access::Read);
        self.bus.enable(true);
        let data = self.bus.read_data();
        self.bus.enable(false);
        data
    }
    /// Send instruction `cmd` to `chip`
    pub fn command(&mut self, chip: Chip, cmd: u8) {
        trace!("KS0108B {:?} CMD {:#04x}", chip, cmd);
        self.write(chip, Register::Instruction, cmd);
    }
    /// Status byte of `chip`
    pub fn status(&mut self, chip: Chip) -> u8 {
        self.read(chip, Register::Instruction)
    }
    fn locate(x: Coord, page: usize) -> (Chip, u8, u8) {
        let x = x as usize;
        let chip = if x < CHIP_COLUMNS { Chip::Left } else { Chip::Right };
        (chip, (x % CHIP_COLUMNS) as u8, page as u8)
    }
    /// Read the byte holding rows `8*page .. 8*page+7` of column `x`
    pub fn read_page(&mut self, x: Coord, page: usize) -> u8 {
        let (chip, col, page) = Self::locate(x, page);
        self.command(chip, SET_PAGE | page);
        self.command(chip, SET_Y | col);
        // First read after addressing returns the stale output register
        self.read(chip, Register::Data);
        self.read(chip, Register::Data)
    }
    /// Write the byte holding rows `8*page .. 8*page+7` of column `x`
    pub fn write_page(&mut self, x: Coord, page: usize, data: u8) {
        let (chip, col, page) = Self::locate(x, page);
        self.command(chip, SET_PAGE | page);
        self.command(chip, SET_Y | col);
        self.write(chip, Register::Data, data);
    }
}

impl<B> PixelSink for Ks0108b<B> where B: DataBus + ControlLines {
    fn set_pixel(&mut self, x: Coord, y: Coord, value: PixelValue) {
        assert!(x < KS0108B_WIDTH, "request {} >= {} width :: ks0108b", x, KS0108B_WIDTH);
        assert!(y < KS0108B_HEIGHT, "request {} >= {} height :: ks0108b", y, KS0108B_HEIGHT);
        let page = y as usize / PAGE_HEIGHT;
        let mask = 1u8 << (y as usize % PAGE_HEIGHT);
        let old = self.read_page(x, page);
        let new = match value {
            PixelValue::On  => old | mask,
            PixelValue::Off => old & !mask,
        };
        self.write_page(x, page, new);
    }
}

impl<B> Controller for Ks0108b<B> where B: DataBus + ControlLines {
    fn size(&self) -> (Coord, Coord) {
        (KS0108B_WIDTH, KS0108B_HEIGHT)
    }
    fn reset(&mut self) {
        for &chip in [Chip::Left, Chip::Right].iter() {
            self.command(chip, DISPLAY_OFF);
            self.command(chip, START_LINE);
            self.command(chip, SET_PAGE);
            self.command(chip, SET_Y);
        }
    }
    fn display_on(&mut self) {
        self.command(Chip::Left, DISPLAY_ON);
        self.command(Chip::Right, DISPLAY_ON);
    }
    fn clear(&mut self) {
        for &chip in [Chip::Left, Chip::Right].iter() {
            for page in 0 .. CHIP_PAGES {
                self.command(chip, SET_PAGE | page as u8);
                self.command(chip, SET_Y);
                // Column address increments after every data write
                for _ in 0 .. CHIP_COLUMNS {
                    self.write(chip, Register::Data, 0);
                }
            }
        }
    }
}

#[derive(Debug,Clone)]
struct ChipState {
    ram: Vec<u8>,
    page: usize,
    y: usize,
    start_line: u8,
    on: bool,
    output: u8,
}

impl ChipState {
    fn new() -> Self {
        Self { ram: vec![0u8; CHIP_PAGES * CHIP_COLUMNS],
               page: 0, y: 0, start_line: 0, on: false, output: 0 }
    }
    fn status(&self) -> u8 {
        if self.on { 0 } else { STATUS_OFF }
    }
    fn execute(&mut self, cmd: u8) {
        if cmd & 0xFE == DISPLAY_OFF {
            self.on = cmd & 1 == 1;
        } else if cmd & 0xC0 == SET_Y {
            self.y = (cmd & 0x3F) as usize;
        } else if cmd & 0xF8 == SET_PAGE {
            self.page = (cmd & 0x07) as usize;
        } else if cmd & 0xC0 == START_LINE {
            self.start_line = cmd & 0x3F;
        } else {
            trace!("KS0108B PANEL ignored {:#04x}", cmd);
        }
    }
    fn write_ram(&mut self, data: u8) {
        self.ram[self.page * CHIP_COLUMNS + self.y] = data;
        self.y = (self.y + 1) % CHIP_COLUMNS;
    }
    fn load_output(&mut self) {
        self.output = self.ram[self.page * CHIP_COLUMNS + self.y];
        self.y = (self.y + 1) % CHIP_COLUMNS;
    }
}

/// Register level model of a KS0108B panel on a split port bus
///
/// Data moves through the owned [SplitPortBus] registers, the chips act
/// on the control lines like the hardware does.
///
/// [SplitPortBus]: struct.SplitPortBus.html
#[derive(Debug,Clone)]
pub struct Ks0108bPanel {
    /// Data bus port registers
    pub bus: SplitPortBus,
    chips: [ChipState; 2],
    chip: Chip,
    reg: Register,
    access: Access,
    enable: bool,
}

impl Default for Ks0108bPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Ks0108bPanel {
    /// Panel switched off with cleared memory
    pub fn new() -> Self {
        Self { bus: SplitPortBus::new(),
               chips: [ChipState::new(), ChipState::new()],
               chip: Chip::Left,
               reg: Register::Instruction,
               access: Access::Write,
               enable: false,
        }
    }
    fn index(chip: Chip) -> usize {
        match chip {
            Chip::Left  => 0,
            Chip::Right => 1,
        }
    }
    fn current(&mut self) -> &mut ChipState {
        &mut self.chips[Self::index(self.chip)]
    }
    /// Display of `chip` is on
    pub fn is_on(&self, chip: Chip) -> bool {
        self.chips[Self::index(chip)].on
    }
    /// Display start line of `chip`
    pub fn start_line(&self, chip: Chip) -> u8 {
        self.chips[Self::index(chip)].start_line
    }
    /// Display memory of `chip`, `page * 64 + column`
    pub fn ram(&self, chip: Chip) -> &[u8] {
        &self.chips[Self::index(chip)].ram
    }
    /// Fill the memory of both chips with `data`
    pub fn fill_ram(&mut self, data: u8) {
        for c in self.chips.iter_mut() {
            c.ram.iter_mut().for_each(|b| *b = data);
        }
    }
    /// Panel memory as a frame buffer
    pub fn to_frame_buffer(&self) -> FrameBuffer {
        let mut fb = FrameBuffer::new(KS0108B_WIDTH, KS0108B_HEIGHT);
        for (n, c) in self.chips.iter().enumerate() {
            for page in 0 .. CHIP_PAGES {
                for col in 0 .. CHIP_COLUMNS {
                    let byte = c.ram[page * CHIP_COLUMNS + col];
                    for bit in 0 .. PAGE_HEIGHT {
                        let x = (n * CHIP_COLUMNS + col) as Coord;
                        let y = (page * PAGE_HEIGHT + bit) as Coord;
                        fb.set(x, y, PixelValue::from(byte & (1 << bit) != 0));
                    }
                }
            }
        }
        fb
    }
    fn latched(&self) -> u8 {
        use crate::bus::{HIGH_MASK, LOW_MASK};
        (self.bus.low.port & LOW_MASK) | (self.bus.high.port & HIGH_MASK)
    }
}

impl DataBus for Ks0108bPanel {
    fn write_data(&mut self, data: u8) {
        self.bus.write_data(data);
    }
    fn read_data(&mut self) -> u8 {
        self.bus.read_data()
    }
}

impl ControlLines for Ks0108bPanel {
    fn select(&mut self, chip: Chip) {
        self.chip = chip;
    }
    fn register(&mut self, reg: Register) {
        self.reg = reg;
    }
    fn access(&mut self, access: Access) {
        self.access = access;
    }
    fn enable(&mut self, high: bool) {
        let rising = high && !self.enable;
        let falling = !high && self.enable;
        self.enable = high;
        if rising && self.access == Access::Read {
            let out = match self.reg {
                Register::Instruction => self.current().status(),
                Register::Data => self.current().output,
            };
            self.bus.drive_pins(out);
        }
        if falling {
            match (self.access, self.reg) {
                (Access::Write, Register::Instruction) => {
                    let cmd = self.latched();
                    self.current().execute(cmd);
                }
                (Access::Write, Register::Data) => {
                    let data = self.latched();
                    self.current().write_ram(data);
                }
                (Access::Read, Register::Data) => self.current().load_output(),
                (Access::Read, Register::Instruction) => {}
            }
        }
    }
}
