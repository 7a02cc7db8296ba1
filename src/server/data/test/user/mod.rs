use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod get_by_role;
mod set_role;
