pub mod period;
pub mod property;
