use chrono::NaiveDate;
use entity::sea_orm_active_enums::EmploymentType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::Config,
    data::{
        course::CourseRepository, course_student::CourseStudentRepository,
        house::HouseRepository, student::StudentRepository, teacher::TeacherRepository,
    },
    error::AppError,
    model::{
        course::SaveCourseParams, house::House, person::PersonFields,
        student::SaveStudentParams, teacher::SaveTeacherParams,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

const HOUSES: [(&str, &str, &str, &str); 4] = [
    ("Gryffindor", "Godric Gryffindor", "scarlet", "gold"),
    ("Hufflepuff", "Helga Hufflepuff", "yellow", "black"),
    ("Ravenclaw", "Rowena Ravenclaw", "blue", "silver"),
    ("Slytherin", "Salazar Slytherin", "green", "silver"),
];

/// Inserts the four houses that are not stored yet.
///
/// Houses have no write endpoints, so this runs on every start.
///
/// # Returns
/// - `Ok(usize)` - Number of houses inserted
/// - `Err(AppError)` - Database error
pub async fn seed_houses(db: &DatabaseConnection) -> Result<usize, AppError> {
    let repo = HouseRepository::new(db);
    let mut inserted = 0;

    for (name, founder, color1, color2) in HOUSES {
        if repo.get_by_name(name).await?.is_some() {
            continue;
        }

        repo.create(House {
            name: name.to_string(),
            founder: founder.to_string(),
            colors: [color1.to_string(), color2.to_string()],
        })
        .await?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!("Seeded {} house(s)", inserted);
    }

    Ok(inserted)
}

type Date = (i32, u32, u32);

/// first, middle, last, birth, house, prefect, enrolled, graduation year
const STUDENTS: [(&str, &str, &str, Date, &str, bool, i32, i32); 12] = [
    ("Harry", "James", "Potter", (1980, 7, 31), "Gryffindor", false, 1991, 1998),
    ("Hermione", "Jean", "Granger", (1979, 9, 19), "Gryffindor", true, 1991, 1998),
    ("Ronald", "Bilius", "Weasley", (1980, 3, 1), "Gryffindor", false, 1991, 1998),
    ("Neville", "Frank", "Longbottom", (1980, 7, 30), "Gryffindor", false, 1991, 1998),
    ("Luna", "", "Lovegood", (1981, 2, 13), "Ravenclaw", false, 1992, 1999),
    ("Draco", "Lucius", "Malfoy", (1980, 6, 5), "Slytherin", false, 1991, 1998),
    ("Cedric", "", "Diggory", (1977, 9, 1), "Hufflepuff", true, 1993, 1995),
    ("Cho", "", "Chang", (1979, 9, 14), "Ravenclaw", false, 1992, 1999),
    ("Ginevra", "Molly", "Weasley", (1981, 8, 11), "Gryffindor", false, 1992, 1999),
    ("Seamus", "", "Finnigan", (1980, 3, 1), "Gryffindor", false, 1991, 1998),
    ("Dean", "", "Thomas", (1980, 1, 1), "Gryffindor", false, 1991, 1998),
    ("Parvati", "", "Patil", (1980, 1, 1), "Gryffindor", false, 1991, 1998),
];

/// first, last, birth, house, head of house, employment, start, end
#[allow(clippy::type_complexity)]
const TEACHERS: [(&str, &str, Date, Option<&str>, bool, EmploymentType, Date, Option<Date>); 8] = [
    ("Minerva", "McGonagall", (1935, 10, 4), Some("Gryffindor"), true, EmploymentType::Tenured, (1956, 9, 1), None),
    ("Severus", "Snape", (1960, 1, 9), Some("Slytherin"), true, EmploymentType::Tenured, (1981, 9, 1), Some((1998, 6, 30))),
    ("Pomona", "Sprout", (1931, 5, 15), Some("Hufflepuff"), true, EmploymentType::Tenured, (1952, 9, 1), None),
    ("Filius", "Flitwick", (1930, 10, 17), Some("Ravenclaw"), true, EmploymentType::Tenured, (1951, 9, 1), None),
    ("Rubeus", "Hagrid", (1928, 12, 6), Some("Gryffindor"), false, EmploymentType::Tenured, (1968, 9, 1), Some((1998, 6, 30))),
    ("Sybill", "Trelawney", (1963, 3, 9), Some("Ravenclaw"), false, EmploymentType::Tenured, (1993, 9, 1), None),
    ("Cuthbert", "Binns", (1865, 1, 1), None, false, EmploymentType::Tenured, (1886, 9, 1), Some((1986, 6, 30))),
    ("Quirinus", "Quirrell", (1968, 9, 26), Some("Ravenclaw"), false, EmploymentType::Temporary, (1991, 9, 1), Some((1992, 6, 30))),
];

fn date((year, month, day): Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Seeds sample students, teachers and two courses.
///
/// Skipped when any student is already stored. Houses must be seeded first.
///
/// # Returns
/// - `Ok(true)` - Sample data inserted
/// - `Ok(false)` - Students already exist, nothing inserted
/// - `Err(AppError)` - Database error, nothing inserted
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    if !StudentRepository::new(db).get_all().await?.is_empty() {
        tracing::info!("Students already present, skipping sample data");
        return Ok(false);
    }

    let txn = db.begin().await?;

    let students = StudentRepository::new(&txn);
    let mut student_ids = Vec::with_capacity(STUDENTS.len());
    for (first, middle, last, born, house, prefect, enrolled, graduation) in STUDENTS {
        let student = students
            .create(SaveStudentParams {
                person: PersonFields {
                    first_name: first.to_string(),
                    middle_name: Some(middle).filter(|m| !m.is_empty()).map(str::to_string),
                    last_name: Some(last.to_string()),
                    date_of_birth: date(born),
                    house: Some(house.to_string()),
                },
                prefect,
                enrollment_year: Some(enrolled),
                graduation_year: Some(graduation),
                graduated: true,
                school_year: None,
            })
            .await?;
        student_ids.push(student.id);
    }

    let teachers = TeacherRepository::new(&txn);
    let mut teacher_ids = Vec::with_capacity(TEACHERS.len());
    for (first, last, born, house, head, employment, start, end) in TEACHERS {
        let teacher = teachers
            .create(SaveTeacherParams {
                person: PersonFields {
                    first_name: first.to_string(),
                    middle_name: None,
                    last_name: Some(last.to_string()),
                    date_of_birth: date(born),
                    house: house.map(str::to_string),
                },
                head_of_house: head,
                employment: Some(employment),
                employment_start: date(start),
                employment_end: end.and_then(date),
            })
            .await?;
        teacher_ids.push(teacher.id);
    }

    let courses = CourseRepository::new(&txn);
    let roster = CourseStudentRepository::new(&txn);

    let transfiguration = courses
        .create(SaveCourseParams {
            subject: "Transfiguration".to_string(),
            school_year: Some(1),
            current: true,
            teacher_id: teacher_ids.first().copied(),
        })
        .await?;
    roster
        .enroll(transfiguration.id, &student_ids[..3.min(student_ids.len())])
        .await?;

    courses
        .create(SaveCourseParams {
            subject: "Potions".to_string(),
            school_year: Some(1),
            current: true,
            teacher_id: teacher_ids.get(1).copied(),
        })
        .await?;

    txn.commit().await?;

    tracing::info!(
        "Seeded {} students, {} teachers and 2 courses",
        student_ids.len(),
        teacher_ids.len()
    );

    Ok(true)
}
