use crate::backend::domain::commands::property::UpsertPropertyCommand;
use crate::backend::domain::models::property::Property as DomainProperty;
use shared::UpsertPropertyRequest;

pub struct PropertyMapper;

impl PropertyMapper {
    /// Convert domain Property to shared Property DTO
    pub fn to_dto(domain: DomainProperty) -> shared::Property {
        shared::Property {
            id: domain.id,
            title: domain.title,
            base_price: domain.base_price,
            cleaning_fee: domain.cleaning_fee,
            service_fee: domain.service_fee,
            currency: domain.currency,
        }
    }

    pub fn to_upsert_command(property_id: String, request: UpsertPropertyRequest) -> UpsertPropertyCommand {
        UpsertPropertyCommand {
            property_id,
            title: request.title,
            base_price: request.base_price,
            cleaning_fee: request.cleaning_fee,
            service_fee: request.service_fee,
            currency: request.currency,
        }
    }
}
