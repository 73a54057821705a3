//! Mock-interview feature: conversational-session provisioning and teardown
//! against the Tavus video API, with transparent mock sessions when the
//! service is unconfigured or unreachable.

pub mod handlers;
pub mod prompts;
pub mod session;
