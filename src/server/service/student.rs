use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course_student::CourseStudentRepository, student::StudentRepository},
    error::AppError,
    model::student::{SaveStudentParams, Student, StudentParams},
    service::person::{resolve_person_merge, resolve_person_replace},
    util::name::split_full_name,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all students ordered by id
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_by_id(id).await?)
    }

    /// Finds the lowest-id student whose name matches `full_name` ignoring case
    ///
    /// A blank name matches nobody.
    pub async fn find_by_name(&self, full_name: &str) -> Result<Option<Student>, AppError> {
        let Some(name) = split_full_name(full_name) else {
            return Ok(None);
        };

        Ok(StudentRepository::new(self.db).find_by_name(&name).await?)
    }

    /// Creates a student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student
    /// - `Err(AppError::BadRequest)` - Missing name or unknown house
    pub async fn create(&self, params: StudentParams) -> Result<Student, AppError> {
        let person = resolve_person_replace(self.db, &params.person).await?;
        let save = SaveStudentParams::replace(person, &params);

        Ok(StudentRepository::new(self.db).create(save).await?)
    }

    /// Replaces every field of a student, clearing the ones absent from `params`.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(AppError::NotFound)` - No student with that id
    /// - `Err(AppError::BadRequest)` - Missing name or unknown house
    pub async fn update(&self, id: i32, params: StudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let person = resolve_person_replace(self.db, &params.person).await?;
        let save = SaveStudentParams::replace(person, &params);

        Ok(repo.update(id, save).await?)
    }

    /// Overwrites only the fields present in `params`.
    pub async fn patch(&self, id: i32, params: StudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);
        let existing = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let person = resolve_person_merge(self.db, existing.person.clone(), &params.person).await?;
        let save = SaveStudentParams::merge(existing, person, &params);

        Ok(repo.update(id, save).await?)
    }

    /// Removes a student from every course roster, then deletes it.
    ///
    /// # Returns
    /// - `Ok(Student)` - The deleted student
    /// - `Err(AppError::NotFound)` - No student with that id
    pub async fn delete(&self, id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let txn = self.db.begin().await?;

        let removed = CourseStudentRepository::new(&txn)
            .delete_by_student(id)
            .await?;
        StudentRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted student {} and {} enrollment(s)", id, removed);

        Ok(student)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Student {} not found.", id))
}
