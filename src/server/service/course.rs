use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, course_student::CourseStudentRepository,
        student::StudentRepository, teacher::TeacherRepository,
    },
    error::AppError,
    model::{
        course::{
            Course, CourseParams, CourseWithRelations, SaveCourseParams, StudentReference,
            ALREADY_ENROLLED, INVALID_STUDENTS, INVALID_TEACHER, NOT_ENROLLED,
        },
        student::Student,
        teacher::Teacher,
    },
    service::student::StudentService,
};

pub const SUBJECT_REQUIRED: &str = "Subject is required.";

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses with their teacher and roster
    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db).get_all().await?;

        Ok(courses
            .into_iter()
            .map(Course::from_with_relations)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        let course = CourseRepository::new(self.db).get_by_id(id).await?;

        Ok(course.map(Course::from_with_relations))
    }

    /// Creates a course with its teacher and roster.
    ///
    /// # Returns
    /// - `Ok(Course)` - The stored course with relations
    /// - `Err(AppError::BadRequest)` - Missing subject, unknown teacher or unknown student
    pub async fn create(&self, params: CourseParams) -> Result<Course, AppError> {
        let subject = required_subject(params.subject)?;
        self.validate_teacher(params.teacher_id).await?;
        let student_ids = self
            .validate_students(params.student_ids.as_deref().unwrap_or_default())
            .await?;

        let txn = self.db.begin().await?;

        let course = CourseRepository::new(&txn)
            .create(SaveCourseParams {
                subject,
                school_year: params.school_year,
                current: params.current.unwrap_or(false),
                teacher_id: params.teacher_id,
            })
            .await?;
        CourseStudentRepository::new(&txn)
            .enroll(course.id, &student_ids)
            .await?;

        txn.commit().await?;

        self.load(course.id).await
    }

    /// Replaces every field of a course including its teacher and roster.
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::BadRequest)` - Missing subject, unknown teacher or unknown student
    pub async fn update(&self, id: i32, params: CourseParams) -> Result<Course, AppError> {
        if !CourseRepository::new(self.db).exists(id).await? {
            return Err(not_found(id));
        }

        let subject = required_subject(params.subject)?;
        self.validate_teacher(params.teacher_id).await?;
        let student_ids = self
            .validate_students(params.student_ids.as_deref().unwrap_or_default())
            .await?;

        let txn = self.db.begin().await?;

        CourseRepository::new(&txn)
            .update(
                id,
                SaveCourseParams {
                    subject,
                    school_year: params.school_year,
                    current: params.current.unwrap_or(false),
                    teacher_id: params.teacher_id,
                },
            )
            .await?;
        CourseStudentRepository::new(&txn)
            .replace_roster(id, &student_ids)
            .await?;

        txn.commit().await?;

        self.load(id).await
    }

    /// Overwrites only the fields present in `params`.
    ///
    /// A present student list replaces the whole roster.
    pub async fn patch(&self, id: i32, params: CourseParams) -> Result<Course, AppError> {
        let existing = self.find(id).await?.course;

        let subject = match params.subject {
            Some(subject) => required_subject(Some(subject))?,
            None => existing.subject,
        };
        self.validate_teacher(params.teacher_id).await?;
        let student_ids = match params.student_ids.as_deref() {
            Some(ids) => Some(self.validate_students(ids).await?),
            None => None,
        };

        let txn = self.db.begin().await?;

        CourseRepository::new(&txn)
            .update(
                id,
                SaveCourseParams {
                    subject,
                    school_year: params.school_year.or(existing.school_year),
                    current: params.current.unwrap_or(existing.current),
                    teacher_id: params.teacher_id.or(existing.teacher_id),
                },
            )
            .await?;
        if let Some(student_ids) = student_ids {
            CourseStudentRepository::new(&txn)
                .replace_roster(id, &student_ids)
                .await?;
        }

        txn.commit().await?;

        self.load(id).await
    }

    /// Empties the roster of a course, then deletes it.
    ///
    /// # Returns
    /// - `Ok(Course)` - The deleted course as it was before deletion
    /// - `Err(AppError::NotFound)` - No course with that id
    pub async fn delete(&self, id: i32) -> Result<Course, AppError> {
        let course = self.load(id).await?;

        let txn = self.db.begin().await?;

        CourseStudentRepository::new(&txn).delete_by_course(id).await?;
        CourseRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(course)
    }

    /// Gets the teacher of a course, `None` when unassigned
    pub async fn get_teacher(&self, id: i32) -> Result<Option<Teacher>, AppError> {
        Ok(self.load(id).await?.teacher)
    }

    /// Gets the roster of a course ordered by student id
    pub async fn get_students(&self, id: i32) -> Result<Vec<Student>, AppError> {
        Ok(self.load(id).await?.students)
    }

    /// Assigns a teacher to a course.
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::BadRequest)` - No teacher with `teacher_id`
    pub async fn set_teacher(&self, id: i32, teacher_id: i32) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(not_found(id));
        }

        self.validate_teacher(Some(teacher_id)).await?;
        repo.set_teacher(id, Some(teacher_id)).await?;

        self.load(id).await
    }

    /// Clears the teacher of a course. Succeeds when no teacher is assigned.
    pub async fn remove_teacher(&self, id: i32) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(not_found(id));
        }

        repo.set_teacher(id, None).await?;

        self.load(id).await
    }

    /// Enrolls a single student.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course with its updated roster
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::BadRequest)` - Unknown student or already enrolled
    pub async fn add_student(&self, id: i32, student_id: i32) -> Result<Course, AppError> {
        if !CourseRepository::new(self.db).exists(id).await? {
            return Err(not_found(id));
        }

        if StudentRepository::new(self.db)
            .get_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(INVALID_STUDENTS.to_string()));
        }

        let roster = CourseStudentRepository::new(self.db);
        if roster.is_enrolled(id, student_id).await? {
            return Err(AppError::BadRequest(ALREADY_ENROLLED.to_string()));
        }

        roster.enroll(id, &[student_id]).await?;

        self.load(id).await
    }

    /// Enrolls several students referenced by id or by name.
    ///
    /// Either every reference is enrolled or none is. An empty list leaves the course
    /// unchanged.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course with its updated roster
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::BadRequest)` - A reference matches no student, or a student is
    ///   already enrolled or named twice
    pub async fn add_students(
        &self,
        id: i32,
        references: Vec<StudentReference>,
    ) -> Result<Course, AppError> {
        let course = self.find(id).await?;
        if references.is_empty() {
            return Ok(Course::from_with_relations(course));
        }

        let mut seen: HashSet<i32> = course.students.iter().map(|s| s.id).collect();
        let mut student_ids = Vec::with_capacity(references.len());

        for reference in references {
            let student_id = self
                .resolve_reference(reference)
                .await?
                .ok_or_else(|| AppError::BadRequest(INVALID_STUDENTS.to_string()))?;

            if !seen.insert(student_id) {
                return Err(AppError::BadRequest(ALREADY_ENROLLED.to_string()));
            }
            student_ids.push(student_id);
        }

        CourseStudentRepository::new(self.db)
            .enroll(id, &student_ids)
            .await?;

        self.load(id).await
    }

    /// Removes a student from the roster.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course with its updated roster
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::BadRequest)` - The student is not enrolled
    pub async fn remove_student(&self, id: i32, student_id: i32) -> Result<Course, AppError> {
        if !CourseRepository::new(self.db).exists(id).await? {
            return Err(not_found(id));
        }

        let removed = CourseStudentRepository::new(self.db)
            .remove(id, student_id)
            .await?;
        if !removed {
            return Err(AppError::BadRequest(NOT_ENROLLED.to_string()));
        }

        self.load(id).await
    }

    async fn find(&self, id: i32) -> Result<CourseWithRelations, AppError> {
        CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn load(&self, id: i32) -> Result<Course, AppError> {
        Ok(Course::from_with_relations(self.find(id).await?))
    }

    async fn validate_teacher(&self, teacher_id: Option<i32>) -> Result<(), AppError> {
        let Some(teacher_id) = teacher_id else {
            return Ok(());
        };

        match TeacherRepository::new(self.db).get_by_id(teacher_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(INVALID_TEACHER.to_string())),
        }
    }

    /// Checks every id belongs to a student and returns them deduplicated.
    async fn validate_students(&self, student_ids: &[i32]) -> Result<Vec<i32>, AppError> {
        let mut unique = student_ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let existing = StudentRepository::new(self.db)
            .find_existing_ids(&unique)
            .await?;
        if existing.len() != unique.len() {
            return Err(AppError::BadRequest(INVALID_STUDENTS.to_string()));
        }

        Ok(unique)
    }

    async fn resolve_reference(&self, reference: StudentReference) -> Result<Option<i32>, AppError> {
        let student = match reference {
            StudentReference::Id(student_id) => {
                StudentRepository::new(self.db).get_by_id(student_id).await?
            }
            StudentReference::Name(name) => StudentService::new(self.db).find_by_name(&name).await?,
        };

        Ok(student.map(|student| student.id))
    }
}

fn required_subject(subject: Option<String>) -> Result<String, AppError> {
    subject
        .filter(|subject| !subject.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(SUBJECT_REQUIRED.to_string()))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Course {} not found.", id))
}
