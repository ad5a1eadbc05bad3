use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{kind, NotifyParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod mark_read;
