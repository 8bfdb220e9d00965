use crate::error::{TodoError, TodoResult};
use crate::models::{Todo, TodoFilter};
use crate::repository::TodoRepository;
use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

const COLLECTION_NAME: &str = "todos";

/// MongoDB-backed todo repository.
///
/// Documents carry the application-level `id` (a UUID string) alongside
/// the MongoDB `_id`; all lookups go through the `id` field, which has a
/// unique index.
#[derive(Clone)]
pub struct MongoTodoRepository {
    collection: Collection<Todo>,
}

impl MongoTodoRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Creates the unique index on `id`. Call once at startup.
    #[instrument(skip(self))]
    pub async fn init_indexes(&self) -> TodoResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        tracing::debug!("Todo indexes ensured");
        Ok(())
    }

    fn build_filter(filter: &TodoFilter) -> Document {
        let mut document = doc! {};
        if let Some(date) = &filter.date {
            document.insert("date", date);
        }
        document
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    #[instrument(skip(self, todo), fields(todo_id = %todo.id))]
    async fn insert(&self, todo: &Todo) -> TodoResult<()> {
        todo.validate()
            .map_err(|err| TodoError::Validation(err.to_string()))?;

        self.collection.insert_one(todo).await?;
        tracing::info!("Todo created");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(options)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn set_completed(&self, id: Uuid, completed: bool) -> TodoResult<Option<Todo>> {
        let updated_at =
            to_bson(&Utc::now()).map_err(|err| TodoError::Database(err.to_string()))?;
        let update = doc! { "$set": { "completed": completed, "updatedAt": updated_at } };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id), update)
            .with_options(options)
            .await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> TodoResult<Option<Todo>> {
        let removed = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?;

        if removed.is_some() {
            tracing::info!(todo_id = %id, "Todo deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_is_empty_without_date() {
        let document = MongoTodoRepository::build_filter(&TodoFilter::default());
        assert!(document.is_empty());
    }

    #[test]
    fn build_filter_matches_date_exactly() {
        let filter = TodoFilter {
            date: Some("2024-06-01".to_string()),
        };
        let document = MongoTodoRepository::build_filter(&filter);
        assert_eq!(document, doc! { "date": "2024-06-01" });
    }

    #[test]
    fn id_filter_serializes_uuid_as_string() {
        let id = Uuid::now_v7();
        let document = MongoTodoRepository::id_filter(id);
        assert_eq!(document.get_str("id").unwrap(), id.to_string());
    }
}
