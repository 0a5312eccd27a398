use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(TourCategory::Id))
                    .col(string_uniq(TourCategory::Name))
                    .col(text_null(TourCategory::Description))
                    .col(timestamp(TourCategory::CreatedAt))
                    .col(timestamp(TourCategory::UpdatedAt))
                    .col(timestamp_null(TourCategory::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourDestination::Table)
                    .if_not_exists()
                    .col(pk_auto(TourDestination::Id))
                    .col(string(TourDestination::City))
                    .col(string(TourDestination::Country))
                    .col(double_null(TourDestination::Latitude))
                    .col(double_null(TourDestination::Longitude))
                    .col(timestamp(TourDestination::CreatedAt))
                    .col(timestamp(TourDestination::UpdatedAt))
                    .col(timestamp_null(TourDestination::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourDestination::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TourCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TourCategory {
    #[sea_orm(iden = "tour_categories")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TourDestination {
    #[sea_orm(iden = "tour_destinations")]
    Table,
    Id,
    City,
    Country,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
