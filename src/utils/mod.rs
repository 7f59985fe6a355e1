/*!
# Utilities

Cross-cutting helpers that are not graph algorithms themselves.
Currently this is the [`Timed`] wrapper used to report the wall-clock duration of an algorithm run.
*/

pub mod timing;

pub use timing::{Timed, timed};
