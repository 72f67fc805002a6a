use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::data::image::ImageRepository;
use crate::model::image::CreateImageParam;

mod insert;
mod list;
