use crate::server::{
    data::connection::ConnectionRepository, error::AppError, model::connection::ConnectionStatus,
};
use test_utils::{builder::TestBuilder, factory};

mod find_between;
mod get_accepted;
mod update_status;
