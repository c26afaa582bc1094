// handlers/mod.rs - two security tiers
//
// Public (no credential) and Protected (behind the access gate). Each handler
// extracts a typed parameter record, calls exactly one access function and
// returns its rows unchanged inside the success envelope.
pub mod protected;
pub mod public;
