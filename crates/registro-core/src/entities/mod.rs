//! The record kinds the registry manages.

mod candidate;
mod person;

pub use candidate::{Candidate, CandidatePatch, ElectedFilter, NewCandidate};
pub use person::{NewPerson, Person, PersonPatch};
