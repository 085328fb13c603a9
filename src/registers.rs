//! Register definitions for the KX132
//!
//! Only the registers the driver touches are declared. Configuration fields in
//! `CNTL1`, `CNTL5` and `ODCNTL` may only be changed while `CNTL1.PC1` is
//! cleared (standby), see [`crate::device`].
//!
//! Output registers come in little-endian blocks of three `i16` (X, Y, Z), so
//! the sample blocks are declared as single 48-bit registers and read in one
//! transaction.

device_driver::create_device!(
    device_name: Kx132,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// XADP_L..ZADP_H - Advanced data path output (0x02..0x07)
        register XadpL {
            type Access = RO;
            const ADDRESS = 0x02;
            const SIZE_BITS = 48;

            x: int = 0..16,
            y: int = 16..32,
            z: int = 32..48,
        },

        /// XOUT_L..ZOUT_H - Acceleration output (0x08..0x0D)
        register XoutL {
            type Access = RO;
            const ADDRESS = 0x08;
            const SIZE_BITS = 48;

            x: int = 0..16,
            y: int = 16..32,
            z: int = 32..48,
        },

        /// WHO_AM_I - Device ID Register (0x13)
        /// Expected value: 0x3D
        register WhoAmI {
            type Access = RO;
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            who_am_i: uint = 0..8,
        },

        /// TSCP - Current tilt position (0x14), one-hot
        register Tscp {
            type Access = RO;
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;

            position: uint = 0..8,
        },

        /// TSPP - Previous tilt position (0x15), one-hot
        register Tspp {
            type Access = RO;
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;

            position: uint = 0..8,
        },

        /// INS1 - Tap/double-tap direction (0x16), one-hot or zero
        register Ins1 {
            type Access = RO;
            const ADDRESS = 0x16;
            const SIZE_BITS = 8;

            direction: uint = 0..8,
        },

        /// INT_REL - Interrupt latch release (0x1A)
        /// Reading it clears every latched interrupt source.
        register IntRel {
            type Access = RO;
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// CNTL1 - Main control (0x1B)
        register Cntl1 {
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            /// Tilt position engine enable
            tpe: bool = 0,
            reserved_1: uint = 1..2,
            /// Tap/double-tap engine enable
            tdte: bool = 2,
            /// Acceleration range (0 = ±2g .. 3 = ±16g)
            gsel: uint = 3..5,
            reserved_5: uint = 5..6,
            /// Performance mode (0 = low power, 1 = high performance)
            res: bool = 6,
            /// Operating mode (0 = standby, 1 = normal)
            pc_1: bool = 7,
        },

        /// CNTL2 - Reset and self-test control (0x1C)
        register Cntl2 {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            reserved_6_0: uint = 0..7,
            /// Software reset, reloads the power-on defaults
            srst: bool = 7,
        },

        /// CNTL5 - Advanced data path control (0x1F)
        register Cntl5 {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            reserved_3_0: uint = 0..4,
            /// Advanced data path enable
            adpe: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// ODCNTL - Output data control (0x21)
        register Odcntl {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// Output data rate code, see [`crate::OutputDataRate`]
            osa: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },
    }
);
