//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod container;
mod product_service;

pub use auth_service::{AuthService, AuthSession, Authenticator, Claims};
pub use container::Services;
pub use product_service::{ProductManager, ProductService};
