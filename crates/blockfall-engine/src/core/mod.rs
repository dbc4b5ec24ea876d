pub use self::{board::*, cell::*};

pub mod catalog;
pub mod rng;

pub(crate) mod board;
pub(crate) mod cell;
