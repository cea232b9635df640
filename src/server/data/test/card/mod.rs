use crate::server::{
    data::card::CardRepository,
    model::card::{NewCard, UpdateCardParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod relocate;
mod update;
