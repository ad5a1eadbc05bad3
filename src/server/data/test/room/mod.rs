use crate::server::{
    data::room::{
        access_request::AccessRequestRepository, member::RoomMemberRepository,
        message::RoomMessageRepository, RoomRepository,
    },
    error::AppError,
    model::room::{AccessRequestStatus, RoomRole},
};
use test_utils::{builder::TestBuilder, factory};

mod access_request;
mod get_visible_paginated;
mod member;
mod message;
