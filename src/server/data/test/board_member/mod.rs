use crate::server::{data::board_member::BoardMemberRepository, model::permission::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_role;
mod update_role;
