use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

#[derive(Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: Option<String>,
}

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            title: Set(new.title.clone()),
            year: Set(new.year),
            description: Set(new.description),
            img_url: Set(new.img_url),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(format!(
                    "\"{}\" is already in the catalog",
                    new.title
                ))),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn update_review(&self, id: i32, rating: f64, review: String) -> AppResult<movie::Model> {
        let movie = self.get(id).await?;
        let mut movie: movie::ActiveModel = movie.into();
        movie.rating = Set(Some(rating));
        movie.review = Set(Some(review));
        movie.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => other.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // SQLite sorts NULL ratings after all values under DESC; the id
    // tie-break keeps ties in insertion order.
    pub async fn list_by_rating(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .order_by_desc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }
}
