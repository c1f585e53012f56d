/*
 * Responsibility
 * - posts CRUD against PostgreSQL
 * - uuid primary keys generated here (v4), so any PostgreSQL version works
 * - list order follows the insertion sequence column
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::repos::error::RepoResult;
use crate::repos::store::{NewPost, Post, PostChanges, PostId, PostStore};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: PostId::Key(row.id),
            title: row.title,
            content: row.content,
            author: row.author,
            date: row.date,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect, then bring the schema up to date.
    pub async fn connect(database_url: &str, max_connections: u32) -> RepoResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("post store migrations applied");

        Ok(Self::new(pool))
    }
}

async fn insert_row<'e, E>(executor: E, post: &NewPost) -> RepoResult<PostRow>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, title, content, author, date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, author, date
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&post.title)
    .bind(&post.content)
    .bind(&post.author)
    .bind(post.date)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

#[async_trait]
impl PostStore for PgPostStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    fn parse_id(&self, raw: &str) -> Option<PostId> {
        Uuid::parse_str(raw).ok().map(PostId::Key)
    }

    async fn list(&self) -> RepoResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author, date
            FROM posts
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get(&self, id: PostId) -> RepoResult<Option<Post>> {
        let PostId::Key(id) = id else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author, date
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: NewPost) -> RepoResult<Post> {
        Ok(insert_row(&self.pool, &post).await?.into())
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> RepoResult<Vec<Post>> {
        // One transaction so a failed seed never leaves a partial set behind.
        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(posts.len());

        for post in &posts {
            stored.push(insert_row(&mut *tx, post).await?.into());
        }

        tx.commit().await?;
        Ok(stored)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> RepoResult<Option<Post>> {
        let PostId::Key(id) = id else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author),
                date = $5
            WHERE id = $1
            RETURNING id, title, content, author, date
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.content.as_deref())
        .bind(changes.author.as_deref())
        .bind(changes.date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn delete(&self, id: PostId) -> RepoResult<bool> {
        let PostId::Key(id) = id else {
            return Ok(false);
        };

        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
