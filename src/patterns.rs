//! Stock blink codes.
//!
//! `.` is a short flash, `_` a long one, anything else a long pause.

mod codes {
    pub const SOS: &str = "... ___ ...";
    pub const HEARTBEAT: &str = ".. ";
    pub const ACK: &str = "._";
    pub const ERROR: &str = "........";
    pub const READY: &str = "_";
}

pub use codes::*;
