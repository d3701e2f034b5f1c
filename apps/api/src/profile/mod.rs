// User-scoped routes under /api/me. Every handler requires a signed-in user.

pub mod handlers;
