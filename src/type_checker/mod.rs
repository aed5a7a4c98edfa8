//! Type checking module.
//!
//! This module infers and checks types over a name-resolved `Program`:
//!
//! - Recording function prototypes before any body is checked
//! - Annotating every expression with its inferred type
//! - Checking operands, assignments, call arguments and return types
//!
//! Types are tracked in a flat table indexed by symbol id, so no scopes are
//! needed at this stage.

pub mod type_checker;
