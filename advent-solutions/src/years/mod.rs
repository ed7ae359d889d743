//! Puzzle solutions by year.

pub mod year_2015;
pub mod year_2016;
pub mod year_2020;
pub mod year_2021;
pub mod year_2022;
pub mod year_2023;
