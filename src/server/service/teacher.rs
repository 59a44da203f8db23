use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, teacher::TeacherRepository},
    error::AppError,
    model::teacher::{SaveTeacherParams, Teacher, TeacherParams},
    service::person::{resolve_person_merge, resolve_person_replace},
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teachers ordered by id
    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a teacher
    pub async fn create(&self, params: TeacherParams) -> Result<Teacher, AppError> {
        let person = resolve_person_replace(self.db, &params.person).await?;
        let save = SaveTeacherParams::replace(person, &params);

        Ok(TeacherRepository::new(self.db).create(save).await?)
    }

    /// Replaces every field of a teacher, clearing the ones absent from `params`.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The updated teacher
    /// - `Err(AppError::NotFound)` - No teacher with that id
    /// - `Err(AppError::BadRequest)` - Missing name or unknown house
    pub async fn update(&self, id: i32, params: TeacherParams) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let person = resolve_person_replace(self.db, &params.person).await?;
        let save = SaveTeacherParams::replace(person, &params);

        Ok(repo.update(id, save).await?)
    }

    pub async fn patch(&self, id: i32, params: TeacherParams) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);
        let existing = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let person = resolve_person_merge(self.db, existing.person.clone(), &params.person).await?;
        let save = SaveTeacherParams::merge(existing, person, &params);

        Ok(repo.update(id, save).await?)
    }

    /// Clears the teacher from every course they teach, then deletes them.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The deleted teacher
    /// - `Err(AppError::NotFound)` - No teacher with that id
    pub async fn delete(&self, id: i32) -> Result<Teacher, AppError> {
        let teacher = TeacherRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let txn = self.db.begin().await?;

        let unassigned = CourseRepository::new(&txn).unassign_teacher(id).await?;
        TeacherRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted teacher {} and unassigned {} course(s)", id, unassigned);

        Ok(teacher)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Teacher {} not found.", id))
}
