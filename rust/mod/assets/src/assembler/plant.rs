use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{CreatePlantResource, Plant, PlantResource};

pub fn to_entity(resource: PlantResource) -> Plant {
    Plant {
        id: resource.id,
        name: resource.name,
        address: resource.address,
        city: resource.city,
        country: resource.country,
        phone: resource.contact_phone,
        email: resource.contact_email,
        active: resource.active,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<Plant, AssembleError> {
    assemble::single::<PlantResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<Plant> {
    assemble::list::<PlantResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(entity: &Plant) -> PlantResource {
    PlantResource {
        id: entity.id,
        name: entity.name.clone(),
        address: entity.address.clone(),
        city: entity.city.clone(),
        country: entity.country.clone(),
        contact_phone: entity.phone.clone(),
        contact_email: entity.email.clone(),
        active: entity.active,
    }
}

pub fn to_create_resource(entity: &Plant) -> CreatePlantResource {
    CreatePlantResource {
        name: entity.name.trim().to_string(),
        address: entity.address.trim().to_string(),
        city: entity.city.clone(),
        country: entity.country.clone(),
        contact_phone: entity.phone.clone().filter(|p| !p.is_empty()),
        contact_email: entity.email.clone().unwrap_or_default(),
    }
}
