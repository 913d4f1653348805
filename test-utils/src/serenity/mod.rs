//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver, so roster and panel code can be tested without a live
//! connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let staff = create_test_role(111111111, "Staff", 0x3498db, 5);
//! let alice = create_test_member(1, 222222222, "alice", &[111111111]);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
