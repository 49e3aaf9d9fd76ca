pub mod application;
pub mod employer;
pub mod job;
pub mod report;
pub mod user;
