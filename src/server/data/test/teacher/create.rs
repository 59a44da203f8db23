use super::*;
use chrono::NaiveDate;

/// Tests inserting a teacher with employment details.
///
/// Expected: Ok with the employment type and dates stored
#[tokio::test]
async fn creates_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = save_params("Quirinus", Some("Quirrell"));
    params.employment = Some(EmploymentType::Temporary);
    params.employment_start = NaiveDate::from_ymd_opt(1991, 9, 1);
    params.employment_end = NaiveDate::from_ymd_opt(1992, 6, 30);

    let teacher = TeacherRepository::new(db).create(params).await?;

    assert!(teacher.id > 0);
    assert_eq!(teacher.employment, Some(EmploymentType::Temporary));
    assert_eq!(teacher.employment_end, NaiveDate::from_ymd_opt(1992, 6, 30));

    Ok(())
}
