//! Career-goal advice feature: prompt construction, live invocation, and the
//! deterministic fallback coach.

pub mod fallback;
pub mod handlers;
pub mod prompts;
