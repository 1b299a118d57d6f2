//! Logging shims that vanish when the `logging` feature is disabled.

#[cfg(feature = "logging")]
macro_rules! lex_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! lex_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(feature = "logging")]
macro_rules! lex_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! lex_trace {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}
