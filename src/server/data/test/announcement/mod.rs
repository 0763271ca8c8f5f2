use crate::server::{
    data::announcement::AnnouncementRepository,
    model::announcement::{CreateAnnouncementParam, UpdateAnnouncementParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod crud;

fn builder() -> TestBuilder {
    TestBuilder::new()
        .with_attendance_tables()
        .with_table(entity::prelude::Announcement)
}
