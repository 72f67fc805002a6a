use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CalendarEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEntry::Id))
                    .col(string(CalendarEntry::Title))
                    .col(text_null(CalendarEntry::Description))
                    .col(string_null(CalendarEntry::Location))
                    .col(timestamp(CalendarEntry::StartTime))
                    .col(timestamp_null(CalendarEntry::EndTime))
                    .col(boolean(CalendarEntry::IsAllDay).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CalendarEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CalendarEntry {
    #[sea_orm(iden = "calendar_entries")]
    Table,
    Id,
    Title,
    Description,
    Location,
    StartTime,
    EndTime,
    IsAllDay,
}
