//! Request-generation tokens.
//!
//! A loader takes a [`Ticket`] before awaiting its request and applies the
//! response only while that ticket is still current. Overlapping loads of
//! the same view are therefore last-write-wins regardless of the order in
//! which responses arrive.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGen {
    current: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestGen {
    /// Start a new request, superseding all earlier tickets.
    pub fn begin(&mut self) -> Ticket {
        self.current = self.current.wrapping_add(1);
        Ticket(self.current)
    }

    /// Supersede in-flight requests without starting a new one.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current == ticket.0
    }
}
