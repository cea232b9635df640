use crate::server::data::board_column::BoardColumnRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod positions;
mod queries;
