//! # hostel-domain
//!
//! Pure domain model for the hostel room allocation system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Rooms** (allocatable units with a stored capacity)
//! - Define **Students** (occupants assigned to exactly one room)
//! - Define the **read models** used for reporting (occupancy, fee summary)
//! - Contain all invariant enforcement and allocation rules
//!   (capacity checks, vacancy checks, input validation)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod report;
pub mod room;
pub mod student;
