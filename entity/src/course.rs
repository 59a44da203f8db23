use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject: String,
    pub school_year: Option<i32>,
    pub current: bool,
    pub teacher_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // No database-level cascade: the teacher service clears this column itself
    // before a teacher row is removed.
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Teacher,
    #[sea_orm(has_many = "super::course_student::Entity")]
    CourseStudent,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::course_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseStudent.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_student::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_student::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
