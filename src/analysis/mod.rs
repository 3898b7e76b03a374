//! Row-wise derived columns applied to a finished pitch table.
//!
//! Each transform appends its columns in place of the table it was given and
//! writes `0.00` wherever a required input is null.

mod delta_win_exp;
mod pitch_movement;
mod umpire_calls;

pub use delta_win_exp::delta_win_exp;
pub use pitch_movement::pitch_movement;
pub use umpire_calls::umpire_calls;
