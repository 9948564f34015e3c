//! Leveled assertions for the engine.
//!
//! Simple checks are cheap and always enabled. Moderate checks are enabled in tests. Advanced
//! checks re-derive engine invariants from scratch (e.g. every support counter at every search
//! node) and are only enabled with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const ARCON_ASSERT_LEVEL_DEFINITION: u8 = ARCON_ASSERT_SIMPLE;

#[cfg(all(test, not(feature = "debug-checks")))]
pub const ARCON_ASSERT_LEVEL_DEFINITION: u8 = ARCON_ASSERT_MODERATE;

#[cfg(feature = "debug-checks")]
pub const ARCON_ASSERT_LEVEL_DEFINITION: u8 = ARCON_ASSERT_ADVANCED;

pub const ARCON_ASSERT_SIMPLE: u8 = 1;
pub const ARCON_ASSERT_MODERATE: u8 = 2;
pub const ARCON_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! arcon_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCON_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcon_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCON_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcon_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCON_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcon_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCON_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
