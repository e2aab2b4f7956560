//! User resource ⇔ personnel mapping.

use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{
    CreateUserResource, NewPersonnel, Personnel, UpdateUserResource, UserResource, DEFAULT_ROLE,
};

/// Explicit first/last names win; otherwise `fullName` is split at the
/// first space. The first role is the personnel role.
pub fn to_entity(resource: UserResource) -> Personnel {
    let (split_first, split_last) =
        split_full_name(resource.full_name.as_deref().unwrap_or_default());
    Personnel {
        id: resource.id,
        code: resource.username,
        first_name: resource.first_name.filter(|n| !n.is_empty()).unwrap_or(split_first),
        last_name: resource.last_name.filter(|n| !n.is_empty()).unwrap_or(split_last),
        email: resource.email.unwrap_or_default(),
        role: resource.roles.into_iter().next().unwrap_or_default(),
        ..Default::default()
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<Personnel, AssembleError> {
    assemble::single::<UserResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<Personnel> {
    assemble::list::<UserResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(entity: &Personnel) -> UserResource {
    UserResource {
        id: entity.id,
        username: entity.code.clone(),
        full_name: Some(entity.full_name()),
        first_name: Some(entity.first_name.clone()),
        last_name: Some(entity.last_name.clone()),
        email: Some(entity.email.clone()),
        roles: roles(&entity.role),
    }
}

pub fn to_create_resource(input: &NewPersonnel) -> CreateUserResource {
    CreateUserResource {
        username: input.code.trim().to_string(),
        password: input.password.clone(),
        email: input.email.trim().to_string(),
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        roles: roles(&input.role),
    }
}

pub fn to_update_resource(entity: &Personnel) -> UpdateUserResource {
    UpdateUserResource {
        email: entity.email.trim().to_string(),
        first_name: entity.first_name.trim().to_string(),
        last_name: entity.last_name.trim().to_string(),
        roles: roles(&entity.role),
    }
}

fn roles(role: &str) -> Vec<String> {
    if role.is_empty() {
        vec![DEFAULT_ROLE.to_string()]
    } else {
        vec![role.to_string()]
    }
}

fn split_full_name(full: &str) -> (String, String) {
    let full = full.trim();
    match full.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (full.to_string(), String::new()),
    }
}
