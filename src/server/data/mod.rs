//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally. News
//! repositories return domain models directly; phonedb repositories return entity models
//! and leave the fallible conversion (stored phone state) to the service layer.
//!
//! Derived HTML fields are computed here, at the persistence boundary, so no caller can
//! write HTML that disagrees with its markdown source.

pub mod category;
pub mod entry;
pub mod feature;
pub mod phone;
pub mod vendor;
