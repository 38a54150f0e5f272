//! Repository layer: in-memory collections keyed by integer identity
//!
//! Repositories exclusively own their entity collections and hold the
//! monotonic next-id counter for fresh creations. `add_with_id` is the restore
//! path used by the storage layer; it advances the counter past restored ids
//! so fresh `add` calls never collide.
//!
//! Not safe for concurrent mutation. Callers embedding these in a multi-user
//! context must add their own serialization.

pub mod programs;
pub mod skills;
pub mod students;

pub use programs::ProgramRepository;
pub use skills::SkillRepository;
pub use students::StudentRepository;
