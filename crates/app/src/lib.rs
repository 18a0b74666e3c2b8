//! # hostel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository`: create, read, delete rooms and report occupancy
//!   - `StudentRepository`: CRUD for students, occupant counts, fee totals
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `AllocationService`: capacity-aware assignment, guarded deletion,
//!     aggregate reporting
//! - Serialize every check-then-write sequence so concurrent callers can
//!   never push a room past its capacity
//!
//! ## Dependency rule
//! Depends on `hostel-domain` only (plus `tokio::sync` for the write gate).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
