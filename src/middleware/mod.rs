pub mod auth;

pub use auth::RequireBearerAuth;
