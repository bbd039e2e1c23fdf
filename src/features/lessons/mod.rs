pub mod dto;
pub mod handler;
pub mod helpers;
pub mod service;

pub use dto::{SearchParams, UpdateLessonResponse};
pub use handler::{handle_list_lessons, handle_search_lessons, handle_update_lesson};
pub use service::{LessonService, LessonStore, UpdateOutcome};
