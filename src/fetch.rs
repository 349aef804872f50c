//! Monotonic tickets for discarding superseded fetch results.
//!
//! Every fetch takes a ticket from its owner's [`FetchSequence`]. A result
//! is applied only if its ticket is still the newest one issued, so a slow
//! response for a wallet the user has already moved away from can never
//! overwrite a fresher one.

/// Identifies one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Issues strictly increasing [`FetchTicket`]s.
#[derive(Clone, Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Whether `ticket` is the newest issued.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
