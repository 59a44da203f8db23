use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    model::student::{SaveStudentParams, Student},
    util::name::NameParts,
};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all students ordered by id
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let student = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(student.map(Student::from_entity))
    }

    /// Returns which of the given ids belong to existing students.
    ///
    /// # Arguments
    /// - `ids` - Student ids to check, duplicates allowed
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The existing ids, each once, in ascending order
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Id)
            .filter(entity::student::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::student::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Finds the first student, by id, whose name matches ignoring case.
    ///
    /// A name with only a first name matches on the first name alone, one with a last
    /// name also requires the last name, and one with a middle name requires all three.
    /// The comparison runs here rather than in SQL since SQLite only folds ASCII case.
    ///
    /// # Arguments
    /// - `name` - Split full name to look for
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Lowest-id student with a matching name
    /// - `Ok(None)` - No student matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &NameParts) -> Result<Option<Student>, DbErr> {
        let candidates = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(candidates
            .into_iter()
            .find(|student| name_matches(student, name))
            .map(Student::from_entity))
    }

    /// Inserts a new student
    pub async fn create(&self, params: SaveStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            ..active_model(params)
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Overwrites every column of an existing student
    pub async fn update(&self, id: i32, params: SaveStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..active_model(params)
        }
        .update(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Deletes a student row
    ///
    /// Roster rows referencing the student must be removed first.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn active_model(params: SaveStudentParams) -> entity::student::ActiveModel {
    entity::student::ActiveModel {
        id: ActiveValue::NotSet,
        first_name: ActiveValue::Set(params.person.first_name),
        middle_name: ActiveValue::Set(params.person.middle_name),
        last_name: ActiveValue::Set(params.person.last_name),
        date_of_birth: ActiveValue::Set(params.person.date_of_birth),
        house: ActiveValue::Set(params.person.house),
        prefect: ActiveValue::Set(params.prefect),
        enrollment_year: ActiveValue::Set(params.enrollment_year),
        graduation_year: ActiveValue::Set(params.graduation_year),
        graduated: ActiveValue::Set(params.graduated),
        school_year: ActiveValue::Set(params.school_year),
    }
}

fn name_matches(student: &entity::student::Model, name: &NameParts) -> bool {
    fn same(stored: Option<&str>, wanted: &str) -> bool {
        stored.is_some_and(|stored| stored.to_lowercase() == wanted.to_lowercase())
    }

    same(Some(student.first_name.as_str()), &name.first)
        && name
            .middle
            .as_deref()
            .is_none_or(|middle| same(student.middle_name.as_deref(), middle))
        && name
            .last
            .as_deref()
            .is_none_or(|last| same(student.last_name.as_deref(), last))
}
