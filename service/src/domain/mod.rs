//! Domain definitions.

pub mod avatar;
pub mod exercise;
pub mod goal;
pub mod session;
pub mod user;
pub mod workout;

pub use self::{
    avatar::Avatar, exercise::Exercise, goal::Goal, session::Record,
    workout::Workout,
};
