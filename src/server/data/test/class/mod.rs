use crate::{
    model::class::ClassStatus,
    server::{
        data::class::ClassRepository,
        model::class::{CreateClassParam, UpdateClassInfoParam, UpdateClassStatusParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_status;
mod get_popular;
mod reserve_seat;
mod update_info;
mod update_status;
