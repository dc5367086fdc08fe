//! Fatal-error reporting for programmer/contract violations (§4.7, §7 of
//! the specification this crate implements).
//!
//! These are never recoverable: an overlapping region, an unmapped probe,
//! an unpopulated decode-table slot, or CLD/SED all indicate a programming
//! error in the host or a ROM depending on unsupported behaviour. There is
//! nothing a `Result` would buy here, so this crate panics, the same way
//! the teacher repo's own emulator core reports its broken invariants.

/// Abort with a diagnostic naming the failing predicate and its source
/// location. `panic!` already carries file/line/column; this macro just
/// keeps the call sites short and consistent.
macro_rules! fatal {
  ($($arg:tt)*) => {
    panic!($($arg)*)
  };
}

pub(crate) use fatal;
