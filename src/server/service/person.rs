//! Resolution of person fields shared by the student and teacher services.

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::person::{PersonFields, PersonParams},
    service::house::HouseService,
    util::name::split_full_name,
};

pub const NAME_REQUIRED: &str = "Name is required.";

/// Builds person fields for a create or full replace.
///
/// # Returns
/// - `Ok(PersonFields)` - Split name, birth date and stored house name
/// - `Err(AppError::BadRequest)` - Name missing or blank, or house unknown
pub async fn resolve_person_replace(
    db: &DatabaseConnection,
    params: &PersonParams,
) -> Result<PersonFields, AppError> {
    let name = params
        .name
        .as_deref()
        .and_then(split_full_name)
        .ok_or_else(|| AppError::BadRequest(NAME_REQUIRED.to_string()))?;

    let house = match params.house.as_deref() {
        Some(house) => Some(HouseService::new(db).resolve(house).await?),
        None => None,
    };

    Ok(PersonFields {
        first_name: name.first,
        middle_name: name.middle,
        last_name: name.last,
        date_of_birth: params.date_of_birth,
        house,
    })
}

/// Overlays the present request fields on existing person fields.
///
/// A present name replaces all three name parts.
pub async fn resolve_person_merge(
    db: &DatabaseConnection,
    mut existing: PersonFields,
    params: &PersonParams,
) -> Result<PersonFields, AppError> {
    if let Some(name) = params.name.as_deref() {
        let parts = split_full_name(name)
            .ok_or_else(|| AppError::BadRequest(NAME_REQUIRED.to_string()))?;
        existing.set_name(parts);
    }

    if let Some(date_of_birth) = params.date_of_birth {
        existing.date_of_birth = Some(date_of_birth);
    }

    if let Some(house) = params.house.as_deref() {
        existing.house = Some(HouseService::new(db).resolve(house).await?);
    }

    Ok(existing)
}
