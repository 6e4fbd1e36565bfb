//! Entity records and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` record struct matching the stored document
//! - A `Deserialize` create DTO for inserts
//! - An all-`Option` update DTO; only supplied fields are written
//!
//! Apps, concepts, lectures, and contact submissions use snake_case
//! field names; affiliate ads use camelCase throughout (that is how the
//! collection has always been written).

pub mod affiliate_ad;
pub mod app;
pub mod concept;
pub mod contact_submission;
pub mod lecture;
