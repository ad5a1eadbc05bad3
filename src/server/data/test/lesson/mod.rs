use crate::server::{
    data::lesson::LessonRepository,
    model::lesson::{CreateLessonParams, UpdateLessonParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user_paginated;
mod update;
