use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::teacher::{SaveTeacherParams, Teacher};

pub struct TeacherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all teachers ordered by id
    pub async fn get_all(&self) -> Result<Vec<Teacher>, DbErr> {
        let teachers = entity::prelude::Teacher::find()
            .order_by_asc(entity::teacher::Column::Id)
            .all(self.db)
            .await?;

        Ok(teachers.into_iter().map(Teacher::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let teacher = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        Ok(teacher.map(Teacher::from_entity))
    }

    /// Inserts a new teacher
    pub async fn create(&self, params: SaveTeacherParams) -> Result<Teacher, DbErr> {
        let teacher = entity::teacher::ActiveModel {
            id: ActiveValue::NotSet,
            ..active_model(params)
        }
        .insert(self.db)
        .await?;

        Ok(Teacher::from_entity(teacher))
    }

    /// Overwrites every column of an existing teacher
    pub async fn update(&self, id: i32, params: SaveTeacherParams) -> Result<Teacher, DbErr> {
        let teacher = entity::teacher::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..active_model(params)
        }
        .update(self.db)
        .await?;

        Ok(Teacher::from_entity(teacher))
    }

    /// Deletes a teacher row
    ///
    /// Courses taught by the teacher must be unassigned first.
    ///
    /// # Returns
    /// - `Ok(true)` - Teacher deleted
    /// - `Ok(false)` - No teacher with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Teacher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn active_model(params: SaveTeacherParams) -> entity::teacher::ActiveModel {
    entity::teacher::ActiveModel {
        id: ActiveValue::NotSet,
        first_name: ActiveValue::Set(params.person.first_name),
        middle_name: ActiveValue::Set(params.person.middle_name),
        last_name: ActiveValue::Set(params.person.last_name),
        date_of_birth: ActiveValue::Set(params.person.date_of_birth),
        house: ActiveValue::Set(params.person.house),
        head_of_house: ActiveValue::Set(params.head_of_house),
        employment: ActiveValue::Set(params.employment),
        employment_start: ActiveValue::Set(params.employment_start),
        employment_end: ActiveValue::Set(params.employment_end),
    }
}
