//! Service layer over the two JSON-file collections.
//! - `storage` holds the whole-file read/write primitive.
//! - `file` binds flights and cities to their files.
//! - `repository` exposes the traits the HTTP layer depends on.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod storage;
pub mod file;

pub use errors::ServiceError;
