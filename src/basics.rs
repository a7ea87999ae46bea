pub mod action;
pub mod narration;
pub mod seating;
pub mod selection;
pub mod view;
