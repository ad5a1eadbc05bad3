use crate::server::data::session::SessionRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_expired;
mod find_active;
