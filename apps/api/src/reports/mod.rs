// Canned read-only reports over jobs, users, employers and applications.
// Each route maps to exactly one query-layer call.

pub mod handlers;
