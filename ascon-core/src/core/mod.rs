pub mod codec;
pub mod permutation;
pub(crate) mod state;
pub(crate) mod trace;
