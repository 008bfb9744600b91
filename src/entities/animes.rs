use sea_orm::entity::prelude::*;

/// Catalog row. Every column except the surrogate key is nullable; the
/// store accepts whatever the client sent, duplicates included.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "animes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: Option<String>,
    pub anio_inicio: Option<i32>,
    pub anio_termino: Option<i32>,
    pub volumenes: Option<i32>,
    pub comentarios: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
