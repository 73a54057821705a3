pub mod report;
pub mod request;
pub mod session;
