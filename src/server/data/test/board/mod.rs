use crate::server::{
    data::board::BoardRepository,
    model::board::{CreateBoardParams, UpdateBoardParams, Visibility},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod column_order;
mod create;
mod get_for_user;
mod update;
