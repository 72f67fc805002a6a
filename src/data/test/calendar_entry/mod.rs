use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::calendar_entry::CalendarEntryFactory;

use crate::data::calendar_entry::CalendarEntryRepository;
use crate::model::calendar::CreateCalendarEntryParam;

mod insert;
mod list_ordered;

fn at(hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
