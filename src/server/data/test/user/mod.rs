use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateProfileParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_xp;
mod create;
mod find_by_login;
mod search_paginated;
mod update_profile;
