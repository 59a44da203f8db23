pub use super::course::Entity as Course;
pub use super::course_student::Entity as CourseStudent;
pub use super::house::Entity as House;
pub use super::student::Entity as Student;
pub use super::teacher::Entity as Teacher;
