//! # Users Domain
//!
//! CRUD domain for user accounts: models, business rules, persistence
//! and HTTP handlers.
//!
//! ## Architecture
//!
//! ```text
//! handlers  ->  UserService  ->  UserRepository
//!   (HTTP)     (business rules)   (persistence)
//! ```
//!
//! The service enforces email uniqueness and partial-update semantics;
//! repositories are pure persistence delegates. Collaborators are wired
//! by constructor injection so tests can swap in the in-memory
//! repository and a deterministic id generator.

pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use id::{IdGenerator, UuidGenerator};
pub use models::{CreateUser, UpdateUser, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
