//! Mock interface implementation for testing the KX132 driver

use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const WHO_AM_I: u8 = 0x13;
pub const TSCP: u8 = 0x14;
pub const TSPP: u8 = 0x15;
pub const INS1: u8 = 0x16;
pub const INT_REL: u8 = 0x1A;
pub const CNTL1: u8 = 0x1B;
pub const CNTL2: u8 = 0x1C;
pub const CNTL5: u8 = 0x1F;
pub const ODCNTL: u8 = 0x21;
pub const XADP_L: u8 = 0x02;
pub const XOUT_L: u8 = 0x08;

/// `CNTL1.PC1`
pub const PC1_BIT: u8 = 0x80;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
    fail_write_to: Option<u8>,
    /// Writes left before the injected failure, if armed
    writes_until_failure: Option<usize>,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            fail_write_to: None,
            writes_until_failure: None,
        };
        state.load_defaults();
        state
    }

    /// Power-on register values
    fn load_defaults(&mut self) {
        self.registers.insert(WHO_AM_I, 0x3D);
        self.registers.insert(CNTL1, 0x00);
        self.registers.insert(CNTL2, 0x00);
        self.registers.insert(CNTL5, 0x00);
        self.registers.insert(ODCNTL, 0x06);
        self.registers.insert(INS1, 0x00);
        self.registers.insert(TSCP, 0x00);
        self.registers.insert(TSPP, 0x00);
    }

    fn set_block(&mut self, start: u8, x: i16, y: i16, z: i16) {
        for (i, byte) in [x, y, z]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .enumerate()
        {
            self.registers.insert(start + i as u8, byte);
        }
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of all register values, sorted by address
    pub fn registers(&self) -> Vec<(u8, u8)> {
        let mut registers: Vec<_> = self
            .state
            .borrow()
            .registers
            .iter()
            .map(|(&a, &v)| (a, v))
            .collect();
        registers.sort_unstable();
        registers
    }

    /// Set WHO_AM_I register value
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(WHO_AM_I, value);
    }

    /// Set accelerometer data (will be returned on next read)
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_block(XOUT_L, x, y, z);
    }

    /// Set advanced data path output (will be returned on next read)
    pub fn set_adp_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_block(XADP_L, x, y, z);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Inject a write failure on the next write to `address`
    pub fn fail_next_write_to(&self, address: u8) {
        self.state.borrow_mut().fail_write_to = Some(address);
    }

    /// Let `n - 1` writes succeed, then fail the `n`-th (1-based)
    pub fn fail_nth_write(&self, n: usize) {
        self.state.borrow_mut().writes_until_failure = Some(n);
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Register writes only, in order
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                Operation::WriteRegister { address, value } => Some((address, value)),
                Operation::ReadRegister { .. } => None,
            })
            .collect()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);

            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });

            // Reading INT_REL releases the latched tap status
            if reg_addr == INT_REL {
                state.registers.insert(INS1, 0);
            }
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }
        if state.fail_write_to == Some(address) {
            state.fail_write_to = None;
            return Err(MockError::Communication);
        }
        if let Some(remaining) = state.writes_until_failure {
            if remaining <= 1 {
                state.writes_until_failure = None;
                return Err(MockError::Communication);
            }
            state.writes_until_failure = Some(remaining - 1);
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);

            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });

            // SRST reloads the defaults and self-clears
            if reg_addr == CNTL2 && byte & 0x80 != 0 {
                state.load_defaults();
            }
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
