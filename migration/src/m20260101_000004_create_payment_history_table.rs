use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentHistory::Id))
                    .col(string(PaymentHistory::UserEmail))
                    .col(integer(PaymentHistory::ClassId))
                    .col(double(PaymentHistory::Price))
                    .col(string_null(PaymentHistory::TransactionId))
                    .col(string_null(PaymentHistory::ClassName))
                    .col(
                        timestamp_with_time_zone(PaymentHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_history_user_class")
                    .table(PaymentHistory::Table)
                    .col(PaymentHistory::UserEmail)
                    .col(PaymentHistory::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentHistory {
    Table,
    Id,
    UserEmail,
    ClassId,
    Price,
    TransactionId,
    ClassName,
    CreatedAt,
}
