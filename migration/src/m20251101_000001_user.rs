use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_ROLE: &str = "idx-users-role";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Phone))
                    .col(string_len(User::Role, 20).default("traveler"))
                    .col(string_null(User::ProfileImage))
                    .col(text_null(User::Bio))
                    .col(boolean(User::IsVerified).default(false))
                    .col(boolean(User::IsActive).default(true))
                    .col(integer_null(User::YearsOfExperience))
                    .col(double(User::AverageRating).default(0.0))
                    .col(integer(User::TotalReviews).default(0))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .col(timestamp_null(User::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ROLE)
                    .table(User::Table)
                    .col(User::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_USER_ROLE).table(User::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Role,
    ProfileImage,
    Bio,
    IsVerified,
    IsActive,
    YearsOfExperience,
    AverageRating,
    TotalReviews,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
