//! Inspection hook for the pipelines.
//!
//! Pipelines never print on their own. Callers that want to see the intermediate states pass a
//! [`Trace`] to the `*_with_trace` entry points; everyone else gets [`NoTrace`].

use super::state::State;

/// Point in a pipeline at which a [`Trace`] hook is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// The initial value block has been loaded, no round has run yet.
    InitialValue,
    /// A permutation round finished; carries the round index (`0..12`).
    Round(usize),
    /// Initialization is complete (including key re-mixing for AEAD).
    Initialized,
    /// Associated data has been absorbed and domain separation applied.
    AssociatedData,
    /// The last plaintext block has been absorbed (encryption).
    Plaintext,
    /// The last ciphertext block has been absorbed (decryption).
    Ciphertext,
    /// The tag has been computed.
    Finalized,
    /// The padded message has been absorbed and the final permutation applied (hashing).
    Absorbed,
    /// One rate block of hash output has been squeezed.
    Squeezed,
}

pub trait Trace {
    fn trace(&mut self, event: Event, state: &State);
}

impl<F> Trace for F
where
    F: FnMut(Event, &State),
{
    fn trace(&mut self, event: Event, state: &State) {
        self(event, state)
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl Trace for NoTrace {
    #[inline(always)]
    fn trace(&mut self, _event: Event, _state: &State) {}
}

/// Prints every event and the state words to stdout.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrintTrace {
    /// Also print the state after every permutation round.
    pub rounds: bool,
}

#[cfg(feature = "std")]
impl Trace for PrintTrace {
    fn trace(&mut self, event: Event, state: &State) {
        match event {
            Event::Round(index) if self.rounds => std::println!("{:<20} {:?}", format!("round {:02}:", index), state),
            Event::Round(_) => {}
            _ => std::println!("{:<20} {:?}", format!("{:?}:", event), state),
        }
    }
}
