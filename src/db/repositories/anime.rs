use crate::entities::{animes, prelude::*};
use crate::models::anime::{Anime, AnimeDraft};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

pub struct AnimeRepository {
    conn: DatabaseConnection,
}

impl AnimeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_anime(model: animes::Model) -> Anime {
        Anime {
            id: model.id,
            name: model.nombre,
            start_year: model.anio_inicio,
            end_year: model.anio_termino,
            volume_count: model.volumenes,
            comments: model.comentarios,
        }
    }

    fn draft_to_active_model(draft: &AnimeDraft) -> animes::ActiveModel {
        animes::ActiveModel {
            nombre: Set(draft.name.clone()),
            anio_inicio: Set(draft.start_year),
            anio_termino: Set(draft.end_year),
            volumenes: Set(draft.volume_count),
            comentarios: Set(draft.comments.clone()),
            ..Default::default()
        }
    }

    /// All rows, newest first.
    pub async fn list_all(&self) -> anyhow::Result<Vec<Anime>> {
        let rows = Animes::find()
            .order_by_desc(animes::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_anime).collect())
    }

    pub async fn insert(&self, draft: &AnimeDraft) -> anyhow::Result<Anime> {
        let model = Self::draft_to_active_model(draft).insert(&self.conn).await?;

        info!(
            "Added anime {}: {}",
            model.id,
            model.nombre.as_deref().unwrap_or("<sin nombre>")
        );
        Ok(Self::map_model_to_anime(model))
    }

    /// Unconditionally sets all five writable columns on the matching row.
    /// An id with no row affects zero rows and is not an error.
    pub async fn overwrite(&self, id: i32, draft: &AnimeDraft) -> anyhow::Result<()> {
        Animes::update_many()
            .col_expr(animes::Column::Nombre, Expr::value(draft.name.clone()))
            .col_expr(animes::Column::AnioInicio, Expr::value(draft.start_year))
            .col_expr(animes::Column::AnioTermino, Expr::value(draft.end_year))
            .col_expr(animes::Column::Volumenes, Expr::value(draft.volume_count))
            .col_expr(
                animes::Column::Comentarios,
                Expr::value(draft.comments.clone()),
            )
            .filter(animes::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    /// Deletes the matching row. Like `overwrite`, a missing id is silent.
    pub async fn remove(&self, id: i32) -> anyhow::Result<()> {
        let result = Animes::delete_by_id(id).exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Removed anime with ID: {id}");
        }
        Ok(())
    }

    /// Inserts the sample catalog in a single statement and returns the
    /// inserted row count. Repeat calls duplicate the batch; there is no
    /// uniqueness constraint to stop them.
    pub async fn seed_samples(&self) -> anyhow::Result<u64> {
        let inserted = Animes::insert_many(sample_rows())
            .exec_without_returning(&self.conn)
            .await?;

        info!("Seeded {inserted} sample animes");
        Ok(inserted)
    }
}

fn sample_rows() -> Vec<animes::ActiveModel> {
    [
        ("One Piece", Some(1999), None, Some(1100), "Sigue en emisión"),
        ("Dragon Ball Z", Some(1989), Some(1996), Some(291), "Clásico de Toei"),
        ("Naruto", Some(2002), Some(2007), Some(220), "Primera etapa"),
        ("Naruto Shippuden", Some(2007), Some(2017), Some(500), "Segunda etapa"),
        ("Bleach", Some(2004), Some(2012), Some(366), "Hasta el arco final"),
        ("Death Note", Some(2006), Some(2007), Some(37), "Thriller completo"),
        (
            "Fullmetal Alchemist: Brotherhood",
            Some(2009),
            Some(2010),
            Some(64),
            "Adaptación fiel al manga",
        ),
        ("Hunter x Hunter", Some(2011), Some(2014), Some(148), "Remake de Madhouse"),
        ("Shingeki no Kyojin", Some(2013), Some(2023), Some(89), "Terminado"),
        ("Cowboy Bebop", Some(1998), Some(1999), Some(26), "Space western"),
        ("Neon Genesis Evangelion", Some(1995), Some(1996), Some(26), "Incluye películas"),
        ("Yu Yu Hakusho", Some(1992), Some(1995), Some(112), "Torneo Oscuro"),
    ]
    .into_iter()
    .map(
        |(nombre, anio_inicio, anio_termino, volumenes, comentarios)| animes::ActiveModel {
            nombre: Set(Some(nombre.to_string())),
            anio_inicio: Set(anio_inicio),
            anio_termino: Set(anio_termino),
            volumenes: Set(volumenes),
            comentarios: Set(Some(comentarios.to_string())),
            ..Default::default()
        },
    )
    .collect()
}
