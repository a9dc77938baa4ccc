#![allow(unused, reason = "logger")]

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "hval", $($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "hval", $($tt)*);
    };
}

pub(crate) use {trace, debug};
