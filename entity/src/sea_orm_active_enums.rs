use sea_orm::entity::prelude::*;

/// Employment status of a teacher, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EmploymentType {
    #[sea_orm(string_value = "TENURED")]
    Tenured,
    #[sea_orm(string_value = "TEMPORARY")]
    Temporary,
    #[sea_orm(string_value = "DECEASED")]
    Deceased,
    #[sea_orm(string_value = "DISCHARGED")]
    Discharged,
    #[sea_orm(string_value = "PROBATION")]
    Probation,
}
