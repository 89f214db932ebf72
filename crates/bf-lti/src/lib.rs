//! Linear time-invariant system primitives for bodeflow.
//!
//! This crate holds the algebraic side of a Bode analysis: the plant is a
//! rational transfer function `N(s) / D(s)` whose polynomials are stored as
//! real coefficient vectors in descending powers of `s`. A pure time delay
//! `exp(-sT)` has no rational form, so it is replaced by a Padé approximant
//! and folded into the plant by rational multiplication.
//!
//! # Architecture
//!
//! - [`Polynomial`]: coefficient storage, convolution, Horner evaluation
//! - [`RationalFunction`]: numerator/denominator pair and its algebra
//! - [`pade`]: Padé approximation of a delay with explicit [`PadeOptions`]
//! - [`TransferFunctionModel`]: the validated, immutable system that gets evaluated
//!
//! Everything here is pure computation over owned values. Nothing caches state
//! between calls, so every operation is safe to run concurrently.

pub mod error;
pub mod model;
pub mod pade;
pub mod polynomial;
pub mod rational;

pub use error::{LtiError, LtiResult};
pub use model::{DEFAULT_DENOMINATOR, DEFAULT_NUMERATOR, ModelBuilder, TransferFunctionModel};
pub use pade::{DelaySpec, PadeOptions, approximate};
pub use polynomial::Polynomial;
pub use rational::{RationalFunction, multiply};
