pub mod age;
pub mod house;
pub mod name;
