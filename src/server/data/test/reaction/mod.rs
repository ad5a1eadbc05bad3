use crate::server::{
    data::reaction::ReactionRepository, error::AppError, model::post::ReactionKind,
};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
