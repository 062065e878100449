//! Domain-level command types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod availability {
    use chrono::NaiveDate;

    /// Input for creating a new availability period.
    #[derive(Debug, Clone)]
    pub struct CreatePeriodCommand {
        pub property_id: String,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        pub is_available: bool,
        pub special_price: Option<f64>,
        pub notes: Option<String>,
    }

    /// Input for replacing an existing availability period.
    #[derive(Debug, Clone)]
    pub struct UpdatePeriodCommand {
        pub property_id: String,
        pub period_id: String,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        pub is_available: bool,
        pub special_price: Option<f64>,
        pub notes: Option<String>,
    }
}

pub mod property {
    /// Input for creating or replacing a property's pricing inputs.
    #[derive(Debug, Clone)]
    pub struct UpsertPropertyCommand {
        pub property_id: String,
        pub title: String,
        pub base_price: f64,
        pub cleaning_fee: f64,
        pub service_fee: f64,
        pub currency: Option<String>,
    }
}
