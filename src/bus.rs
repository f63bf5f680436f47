//! Parallel data bus
//!
//! The controller's 8 bit data bus is split across two I/O ports: data
//! bits 0..1 sit on the low port and bits 2..7 on the high port. The port
//! registers are owned by the bus handle instead of being reached for as
//! globals.

/// Data bits carried by the low port
pub const LOW_MASK : u8 = 0b0000_0011;
/// Data bits carried by the high port
pub const HIGH_MASK : u8 = 0b1111_1100;

/// Byte wide access to a display controller's data lines
pub trait DataBus {
    /// Drive `data` onto the bus
    fn write_data(&mut self, data: u8);
    /// Release the bus and sample it
    fn read_data(&mut self) -> u8;
}

/// Registers of one I/O port
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct PortRegisters {
    /// Data direction, a set bit is an output
    pub ddr: u8,
    /// Output latch
    pub port: u8,
    /// Input pins
    pub pin: u8,
}

/// Data bus spread over two ports
///
///     use glcd::{DataBus,SplitPortBus};
///
///     let mut bus = SplitPortBus::new();
///     bus.write_data(0xA5);
///     assert_eq!(bus.low.port, 0x01);
///     assert_eq!(bus.high.port, 0xA4);
///
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct SplitPortBus {
    /// Port carrying bits 0..1
    pub low: PortRegisters,
    /// Port carrying bits 2..7
    pub high: PortRegisters,
}

impl SplitPortBus {
    /// Bus with all registers cleared
    pub fn new() -> Self {
        Self::default()
    }
    /// Bus over existing port state
    pub fn with_ports(low: PortRegisters, high: PortRegisters) -> Self {
        Self { low, high }
    }
    /// Present `data` on the input pins, as a device driving the bus would
    pub fn drive_pins(&mut self, data: u8) {
        self.low.pin = (self.low.pin & !LOW_MASK) | (data & LOW_MASK);
        self.high.pin = (self.high.pin & !HIGH_MASK) | (data & HIGH_MASK);
    }
}

impl DataBus for SplitPortBus {
    fn write_data(&mut self, data: u8) {
        self.low.ddr |= LOW_MASK;
        self.high.ddr |= HIGH_MASK;

        // Pins outside the masks belong to other peripherals
        self.low.port &= !LOW_MASK;
        self.high.port &= !HIGH_MASK;

        self.low.port |= data & LOW_MASK;
        self.high.port |= data & HIGH_MASK;
    }
    fn read_data(&mut self) -> u8 {
        self.low.ddr &= !LOW_MASK;
        self.high.ddr &= !HIGH_MASK;

        (self.low.pin & LOW_MASK) | (self.high.pin & HIGH_MASK)
    }
}

impl<B> DataBus for &mut B where B: DataBus + ?Sized {
    fn write_data(&mut self, data: u8) {
        (**self).write_data(data);
    }
    fn read_data(&mut self) -> u8 {
        (**self).read_data()
    }
}

/// Controller half addressed by the chip select lines
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum Chip {
    /// Columns 0..63, CS1
    Left,
    /// Columns 64..127, CS2
    Right,
}

/// Target of a bus transfer, the D/I line
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum Register {
    /// Instructions on write, status on read
    Instruction,
    /// Display memory
    Data,
}

/// Direction of a bus transfer, the R/W line
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum Access {
    /// Controller drives the data bus
    Read,
    /// Host drives the data bus
    Write,
}

/// Control lines next to the data bus
///
/// A transfer is latched by the controller on the falling edge of the
/// enable line; on reads the controller drives the data bus while enable
/// is high.
pub trait ControlLines {
    /// Drive the chip select lines
    fn select(&mut self, chip: Chip);
    /// Drive the D/I line
    fn register(&mut self, reg: Register);
    /// Drive the R/W line
    fn access(&mut self, access: Access);
    /// Drive the enable line
    fn enable(&mut self, high: bool);
}

impl<B> ControlLines for &mut B where B: ControlLines + ?Sized {
    fn select(&mut self, chip: Chip) {
        (**self).select(chip);
    }
    fn register(&mut self, reg: Register) {
        (**self).register(reg);
    }
    fn access(&mut self, access: Access) {
        (**self).access(access);
    }
    fn enable(&mut self, high: bool) {
        (**self).enable(high);
    }
}
