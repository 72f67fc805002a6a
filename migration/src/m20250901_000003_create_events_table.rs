use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000002_create_calendar_entries_table::CalendarEntry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(integer(Event::CalendarEntryId))
                    .col(string_null(Event::Category))
                    .col(json_null(Event::Tags))
                    .col(text_null(Event::AdditionalInfo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_calendar_entry_id")
                            .from(Event::Table, Event::CalendarEntryId)
                            .to(CalendarEntry::Table, CalendarEntry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Title,
    CalendarEntryId,
    Category,
    Tags,
    AdditionalInfo,
}
