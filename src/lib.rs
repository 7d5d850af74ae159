pub mod calculator;
pub mod lucky;
pub mod match_data;
pub mod math;
pub mod prediction;
pub mod sector;
pub mod tables;
