//! Logging macros for the progression iterators.
//!
//! With the `logging` feature, messages are forwarded to the `log` crate.
//! Without it, the macros only borrow their arguments so that no "unused"
//! warnings are emitted, and nothing ends up in the binary.

macro_rules! log_at {
    ($level:ident, $fmt:literal $(, $($arg:expr),* $(,)?)?) => {
        #[cfg(feature = "logging")]
        ::log::$level!(target: "hayro_progression", $fmt $(, $($arg),*)?);
        #[cfg(not(feature = "logging"))]
        { $($(let _ = &$arg;)*)? }
    };
}

/// Which order was picked for a tile.
macro_rules! ldebug {
    ($($tt:tt)*) => {
        $crate::log::log_at!(debug, $($tt)*)
    };
}

/// The parameters a single iterator was created with.
macro_rules! ltrace {
    ($($tt:tt)*) => {
        $crate::log::log_at!(trace, $($tt)*)
    };
}

/// Orders that were requested but can't be iterated.
macro_rules! lwarn {
    ($($tt:tt)*) => {
        $crate::log::log_at!(warn, $($tt)*)
    };
}

pub(crate) use ldebug;
pub(crate) use log_at;
pub(crate) use ltrace;
pub(crate) use lwarn;
