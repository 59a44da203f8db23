mod course;
mod course_student;
mod house;
mod student;
mod teacher;
