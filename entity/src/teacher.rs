use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EmploymentType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub house: Option<String>,
    pub head_of_house: bool,
    pub employment: Option<EmploymentType>,
    pub employment_start: Option<Date>,
    pub employment_end: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house::Entity",
        from = "Column::House",
        to = "super::house::Column::Name",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    House,
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
}

impl Related<super::house::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::House.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
