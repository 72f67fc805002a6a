use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::data::event::EventRepository;
use crate::model::event::CreateEventParam;

mod insert;
mod list;

fn sample_param(calendar_entry_id: i32, tags: Option<Vec<&str>>) -> CreateEventParam {
    CreateEventParam {
        title: "Street festival".to_string(),
        calendar_entry_id,
        category: Some("culture".to_string()),
        tags: tags.map(|tags| tags.into_iter().map(str::to_string).collect()),
        additional_info: None,
    }
}
