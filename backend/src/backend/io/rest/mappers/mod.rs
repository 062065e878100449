pub mod period_mapper;
pub mod property_mapper;

pub use period_mapper::PeriodMapper;
pub use property_mapper::PropertyMapper;
