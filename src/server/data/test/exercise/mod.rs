use crate::server::{
    data::exercise::ExerciseRepository,
    error::AppError,
    model::exercise::{CreateExerciseParams, ExerciseType},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_lesson_id;
