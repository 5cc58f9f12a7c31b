#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CHARGE_ASSERT_LEVEL_DEFINITION: u8 = CHARGE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CHARGE_ASSERT_LEVEL_DEFINITION: u8 = CHARGE_ASSERT_MODERATE;

pub const CHARGE_ASSERT_SIMPLE: u8 = 1;
pub const CHARGE_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! charge_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CHARGE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CHARGE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! charge_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CHARGE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CHARGE_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! charge_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CHARGE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CHARGE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
