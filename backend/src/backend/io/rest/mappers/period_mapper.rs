use shared::{AvailabilityPeriod, CreateAvailabilityPeriodRequest, UpdateAvailabilityPeriodRequest};

use crate::backend::domain::commands::availability::{CreatePeriodCommand, UpdatePeriodCommand};
use crate::backend::domain::models::period::AvailabilityPeriod as DomainAvailabilityPeriod;

pub struct PeriodMapper;

impl PeriodMapper {
    /// Convert domain AvailabilityPeriod to shared AvailabilityPeriod DTO
    pub fn to_dto(domain: DomainAvailabilityPeriod) -> AvailabilityPeriod {
        AvailabilityPeriod {
            id: domain.id,
            property_id: domain.property_id,
            start_date: domain.start_date,
            end_date: domain.end_date,
            is_available: domain.is_available,
            special_price: domain.special_price,
            notes: domain.notes,
        }
    }

    pub fn to_dto_list(periods: Vec<DomainAvailabilityPeriod>) -> Vec<AvailabilityPeriod> {
        periods.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(property_id: String, request: CreateAvailabilityPeriodRequest) -> CreatePeriodCommand {
        CreatePeriodCommand {
            property_id,
            start_date: request.start_date,
            end_date: request.end_date,
            is_available: request.is_available,
            special_price: request.special_price,
            notes: request.notes,
        }
    }

    pub fn to_update_command(
        property_id: String,
        period_id: String,
        request: UpdateAvailabilityPeriodRequest,
    ) -> UpdatePeriodCommand {
        UpdatePeriodCommand {
            property_id,
            period_id,
            start_date: request.start_date,
            end_date: request.end_date,
            is_available: request.is_available,
            special_price: request.special_price,
            notes: request.notes,
        }
    }
}
