//! Public conversion models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The [`twine_core::Model`] implementation
//! is a thin adapter that delegates to the core function, so the same
//! arithmetic can be called directly or through the `Model` interface.

pub mod length;
