use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HouseDto {
    pub name: String,
    pub founder: String,
    /// Primary and secondary house colors, in that order.
    pub colors: Vec<String>,
}
