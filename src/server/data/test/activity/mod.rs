use crate::server::{
    data::activity::ActivityRepository,
    model::activity::{ActivityAction, ActivityFilter, NewActivity, Page},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod get_by_board;
mod record;
