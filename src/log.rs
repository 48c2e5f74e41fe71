//! Crate internal logging, compiled out without the `log` feature.

macro_rules! emit {
    ($level:ident, $($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::log!(target: "h1req", ::log::Level::$level, $($tt)*);
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        $crate::log::emit!(Trace, $($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        $crate::log::emit!(Debug, $($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        $crate::log::emit!(Warn, $($tt)*);
    };
}

pub(crate) use {debug, emit, trace, warning};
