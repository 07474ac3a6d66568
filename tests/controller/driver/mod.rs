mod login;
mod profile;
mod register;

pub use super::*;
