//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod apply;
pub mod favorite;
pub mod game;
pub mod level;
pub mod mission;
pub mod notification;
pub mod payment;
pub mod points;
pub mod user;
pub mod video;

/// A status enum whose values form a one-way state machine.
pub trait Transition: Copy + PartialEq {
    /// Whether moving from `self` to `next` is an allowed step.
    ///
    /// Staying in the same state is never a transition.
    fn can_transition_to(self, next: Self) -> bool;
}
