use sea_orm_migration::{prelude::*, schema::*};

// No foreign key on class_id: deleting a class leaves selections in place.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SelectedClass::Table)
                    .if_not_exists()
                    .col(pk_auto(SelectedClass::Id))
                    .col(string(SelectedClass::UserEmail))
                    .col(integer(SelectedClass::ClassId))
                    .col(
                        timestamp_with_time_zone(SelectedClass::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_selected_class_user_class")
                    .table(SelectedClass::Table)
                    .col(SelectedClass::UserEmail)
                    .col(SelectedClass::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SelectedClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SelectedClass {
    Table,
    Id,
    UserEmail,
    ClassId,
    CreatedAt,
}
