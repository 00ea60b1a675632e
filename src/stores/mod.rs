pub mod activity_store;
pub mod teacher_store;
