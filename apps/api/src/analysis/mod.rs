// Skill-gap analysis and roadmap resolution.
// Pure, synchronous computation over the read-only catalog.

pub mod gap;
pub mod handlers;
pub mod normalizer;
pub mod resolver;
pub mod roadmap;

pub use resolver::GapResolver;
