// Job postings: CRUD handlers and request payload validation.

pub mod handlers;
pub mod validation;
