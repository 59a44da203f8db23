use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::course::{CourseWithRelations, SaveCourseParams};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all courses ordered by id with their teacher and roster
    pub async fn get_all(&self) -> Result<Vec<CourseWithRelations>, DbErr> {
        let courses = entity::prelude::Course::find()
            .find_also_related(entity::prelude::Teacher)
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        self.with_students(courses).await
    }

    /// Gets a course by ID with its teacher and roster
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CourseWithRelations>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id)
            .find_also_related(entity::prelude::Teacher)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_students(vec![course]).await?.pop())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let course = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(course.is_some())
    }

    /// Inserts a new course without a roster
    pub async fn create(&self, params: SaveCourseParams) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            subject: ActiveValue::Set(params.subject),
            school_year: ActiveValue::Set(params.school_year),
            current: ActiveValue::Set(params.current),
            teacher_id: ActiveValue::Set(params.teacher_id),
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every column of an existing course
    pub async fn update(
        &self,
        id: i32,
        params: SaveCourseParams,
    ) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            subject: ActiveValue::Set(params.subject),
            school_year: ActiveValue::Set(params.school_year),
            current: ActiveValue::Set(params.current),
            teacher_id: ActiveValue::Set(params.teacher_id),
        }
        .update(self.db)
        .await
    }

    /// Sets or clears the teacher of a single course
    pub async fn set_teacher(&self, id: i32, teacher_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::Course::update_many()
            .filter(entity::course::Column::Id.eq(id))
            .col_expr(entity::course::Column::TeacherId, Expr::value(teacher_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears the teacher of every course taught by `teacher_id`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of courses that lost their teacher
    /// - `Err(DbErr)` - Database error during update
    pub async fn unassign_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::update_many()
            .filter(entity::course::Column::TeacherId.eq(teacher_id))
            .col_expr(entity::course::Column::TeacherId, Expr::value(None::<i32>))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a course row
    ///
    /// The roster must be emptied first.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the rosters of the given courses with two queries
    async fn with_students(
        &self,
        courses: Vec<(entity::course::Model, Option<entity::teacher::Model>)>,
    ) -> Result<Vec<CourseWithRelations>, DbErr> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i32> = courses.iter().map(|(course, _)| course.id).collect();

        let enrollments = entity::prelude::CourseStudent::find()
            .filter(entity::course_student::Column::CourseId.is_in(course_ids))
            .order_by_asc(entity::course_student::Column::StudentId)
            .all(self.db)
            .await?;

        let student_ids: Vec<i32> = enrollments.iter().map(|e| e.student_id).collect();
        let students_map: HashMap<i32, entity::student::Model> = if !student_ids.is_empty() {
            entity::prelude::Student::find()
                .filter(entity::student::Column::Id.is_in(student_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        } else {
            HashMap::new()
        };

        let mut rosters: HashMap<i32, Vec<entity::student::Model>> = HashMap::new();
        for enrollment in enrollments {
            if let Some(student) = students_map.get(&enrollment.student_id) {
                rosters
                    .entry(enrollment.course_id)
                    .or_default()
                    .push(student.clone());
            }
        }

        Ok(courses
            .into_iter()
            .map(|(course, teacher)| CourseWithRelations {
                students: rosters.remove(&course.id).unwrap_or_default(),
                course,
                teacher,
            })
            .collect())
    }
}
