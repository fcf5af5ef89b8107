//! Declarative side effects emitted by the reducer.

use super::message::Message;

/// A side effect for the driver to execute. The reducer never performs
/// I/O itself; it returns command values and the driver feeds each
/// result back into the loop as a new message.
#[derive(Debug, Clone, Copy)]
pub enum Command {
    /// GET the fixed rates endpoint (no body, no auth) and hand the raw
    /// response bytes, `None` on any failure, to `deliver`.
    ///
    /// `deliver` is an enum-variant constructor used as a plain
    /// function, so the reducer can say "send the outcome back as
    /// `DataReceived`" without naming the transport.
    FetchRates {
        deliver: fn(Option<Vec<u8>>) -> Message,
    },
}
