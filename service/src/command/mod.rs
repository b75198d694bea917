//! [`Command`] definition.

pub mod finish_workout;
pub mod resolve_bearer_token;
pub mod select_avatar;
pub mod set_goals;
pub mod sign_in;
pub mod sign_out;
pub mod start_workout;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    finish_workout::FinishWorkout, resolve_bearer_token::ResolveBearerToken,
    select_avatar::SelectAvatar, set_goals::SetGoals, sign_in::SignIn,
    sign_out::SignOut, start_workout::StartWorkout,
};
