use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub house: Option<String>,
    pub prefect: bool,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub graduated: bool,
    pub school_year: Option<i32>,
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
    #[sea_orm(has_many = "super::course_student::Entity")]
    CourseStudent,
}

impl Related<super::house::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::House.def()
    }
}

impl Related<super::course_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseStudent.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_student::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_student::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
