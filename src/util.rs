/// Numeric helpers.
///
/// Integer floor division that reports overflow instead of panicking.
pub mod num;
/// Stack growth for deeply nested programs.
///
/// Parsing and evaluation recurse once per nesting level; the helpers here
/// grow the stack on demand instead of overflowing it.
pub mod stack;
