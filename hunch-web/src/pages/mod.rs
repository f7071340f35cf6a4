//! Full-page chrome for each deployment track.

pub mod canary;
pub mod loading;
pub mod stable;
