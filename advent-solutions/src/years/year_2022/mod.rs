pub mod day_9;
pub mod day_12;
