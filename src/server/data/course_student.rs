use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CourseStudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseStudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the ids of the students enrolled in a course, ascending
    ///
    /// Services read rosters through `CourseRepository`; this is for checking rows directly.
    #[cfg(test)]
    pub async fn get_student_ids(&self, course_id: i32) -> Result<Vec<i32>, DbErr> {
        use sea_orm::{QueryOrder, QuerySelect};

        entity::prelude::CourseStudent::find()
            .select_only()
            .column(entity::course_student::Column::StudentId)
            .filter(entity::course_student::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_student::Column::StudentId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn is_enrolled(&self, course_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::CourseStudent::find_by_id((course_id, student_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Enrolls students in a course.
    ///
    /// # Arguments
    /// - `course_id` - Course to enroll into
    /// - `student_ids` - Students to add; none may already be enrolled
    ///
    /// # Returns
    /// - `Ok(())` - Rows inserted (returns early if slice is empty)
    /// - `Err(DbErr)` - Database error, including a duplicate enrollment
    pub async fn enroll(&self, course_id: i32, student_ids: &[i32]) -> Result<(), DbErr> {
        if student_ids.is_empty() {
            return Ok(());
        }

        let rows = student_ids
            .iter()
            .map(|student_id| entity::course_student::ActiveModel {
                course_id: ActiveValue::Set(course_id),
                student_id: ActiveValue::Set(*student_id),
            });

        entity::prelude::CourseStudent::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes a single enrollment.
    ///
    /// # Returns
    /// - `Ok(true)` - Enrollment removed
    /// - `Ok(false)` - The student was not enrolled
    pub async fn remove(&self, course_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CourseStudent::delete_by_id((course_id, student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces a course's roster with the given students.
    ///
    /// Deletes every existing enrollment then inserts the new ones. Run inside a
    /// transaction so a failed insert keeps the old roster.
    pub async fn replace_roster(&self, course_id: i32, student_ids: &[i32]) -> Result<(), DbErr> {
        self.delete_by_course(course_id).await?;

        let mut unique = student_ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        self.enroll(course_id, &unique).await
    }

    /// Removes every enrollment of a course
    pub async fn delete_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CourseStudent::delete_many()
            .filter(entity::course_student::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes a student from every course roster
    pub async fn delete_by_student(&self, student_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CourseStudent::delete_many()
            .filter(entity::course_student::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
