// Accounts: registration and the self-reported setup fields.
// Credential auth and sessions live in the external auth service.

pub mod handlers;
pub mod store;
