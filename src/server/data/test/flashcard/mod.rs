use crate::server::{
    data::flashcard::FlashcardRepository,
    model::flashcard::{CreateFlashcardParams, Schedule},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_owned;
mod get_due;
mod update_schedule;
