// Shared library for the Brewline services.
//
// `kafka` carries the broker-facing pieces (connection settings, publisher,
// ordered consumer), `fulfillment` the dispatch loop and order processing,
// and `shutdown` the interrupt coordination used by the worker binary.

pub mod fulfillment;
pub mod kafka;
pub mod shutdown;
