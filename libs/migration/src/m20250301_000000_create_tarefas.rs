use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(TarefaStatus::Enum)
                    .values(TarefaStatus::values())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tarefas::Table)
                    .if_not_exists()
                    .col(pk_auto(Tarefas::Id))
                    .col(string(Tarefas::Titulo))
                    .col(text_null(Tarefas::Descricao))
                    .col(date_time(Tarefas::Data))
                    .col(
                        ColumnDef::new(Tarefas::Status)
                            .enumeration(TarefaStatus::Enum, TarefaStatus::values())
                            .not_null()
                            .default("pendente"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tarefas_status")
                    .table(Tarefas::Table)
                    .col(Tarefas::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tarefas_data")
                    .table(Tarefas::Table)
                    .col(Tarefas::Data)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tarefas::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_type(Type::drop().if_exists().name(TarefaStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tarefas {
    Table,
    Id,
    Titulo,
    Descricao,
    Data,
    Status,
}

#[derive(DeriveIden, Clone, Copy)]
enum TarefaStatus {
    #[sea_orm(iden = "tarefa_status")]
    Enum,
    #[sea_orm(iden = "pendente")]
    Pendente,
    #[sea_orm(iden = "em_andamento")]
    EmAndamento,
    #[sea_orm(iden = "finalizado")]
    Finalizado,
}

impl TarefaStatus {
    fn values() -> [Self; 3] {
        [Self::Pendente, Self::EmAndamento, Self::Finalizado]
    }
}
