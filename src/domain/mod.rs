// Domain layer: the value types. No I/O.

pub mod clock_time;
pub mod conversion;
pub mod workday;
