use sea_orm::entity::prelude::*;

/// An event attached to a calendar entry. Tags are stored as a nullable JSON
/// array of strings so the column works on both Postgres and SQLite.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub calendar_entry_id: i32,
    pub category: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub tags: Option<Json>,
    pub additional_info: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::calendar_entry::Entity",
        from = "Column::CalendarEntryId",
        to = "super::calendar_entry::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CalendarEntry,
}

impl Related<super::calendar_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
