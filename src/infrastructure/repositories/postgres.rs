use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{
    models::{ConversationField, Direction, Message},
    repositories::MessageRepository,
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn list(
        &self,
        phone_number_id: &str,
        limit: u32,
        offset: u32,
    ) -> anyhow::Result<(Vec<Message>, bool)> {
        // one extra row to detect a following page
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, phone_number_id, to_number, from_number, direction,
                   message_type, conversation, created_at
            FROM wba_messages
            WHERE phone_number_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(phone_number_id)
        .bind(limit as i64 + 1)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        let has_more = records.len() > limit as usize;
        let messages = records
            .into_iter()
            .take(limit as usize)
            .map(Message::from)
            .collect();
        Ok((messages, has_more))
    }

    async fn delete(&self, phone_number_id: &str, message_ids: &[String]) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"DELETE FROM wba_messages WHERE phone_number_id = $1 AND id = ANY($2)"#,
        )
        .bind(phone_number_id)
        .bind(message_ids)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}

#[derive(FromRow)]
struct MessageRecord {
    id: String,
    phone_number_id: String,
    to_number: Option<String>,
    from_number: Option<String>,
    direction: String,
    message_type: String,
    conversation: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message {
            id: record.id,
            phone_number_id: record.phone_number_id,
            to: record.to_number,
            from: record.from_number,
            direction: Direction::from_str(&record.direction),
            // kept raw; normalization happens in the event builder
            conversation: record.conversation.map(ConversationField::Raw),
            message_type: record.message_type,
            created_at: record.created_at,
        }
    }
}
