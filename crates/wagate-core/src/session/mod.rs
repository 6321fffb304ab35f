//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `repository`: Repository trait for session persistence

mod model;
mod repository;

pub use model::{MAX_SESSION_NAME_LEN, Session};
pub use repository::SessionRepository;
