//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attachments;
mod groups;
mod homeworks;
mod user_groups;
mod users;

use crate::config::DatabaseConfig;
use crate::errors::{Result, SchoolBotError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{debug, info};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + 外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolBotError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000");
        }

        // 内存数据库每个连接都是独立的库，只能保持单个长连接
        let pool_options = if in_memory {
            debug!("Using single persistent connection for in-memory SQLite");
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolBotError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolBotError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolBotError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 写操作的错误转换：约束冲突保留分类，其余错误附带操作说明
pub(crate) fn write_err(action: &'static str) -> impl Fn(sea_orm::DbErr) -> SchoolBotError {
    move |e| match SchoolBotError::from(e) {
        SchoolBotError::DatabaseOperation(msg) => {
            SchoolBotError::database_operation(format!("{action}失败: {msg}"))
        }
        other => other,
    }
}

// Storage trait 实现
use crate::models::{
    PageWindow,
    attachments::{
        entities::Attachment,
        requests::{CreateAttachmentRequest, UpdateAttachmentRequest},
    },
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, UpdateGroupRequest},
    },
    homeworks::{
        entities::Homework,
        requests::{CreateHomeworkRequest, UpdateHomeworkRequest},
    },
    user_groups::{
        entities::UserGroup,
        requests::{CreateUserGroupRequest, UpdateUserGroupRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_telegram_id(&self, telegram_id: i64) -> Result<Option<User>> {
        self.get_user_by_telegram_id_impl(telegram_id).await
    }

    async fn list_users(&self, window: PageWindow) -> Result<Vec<User>> {
        self.list_users_impl(window).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    // 分组模块
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(group_id).await
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        self.get_group_by_name_impl(name).await
    }

    async fn list_groups(&self, window: PageWindow) -> Result<Vec<Group>> {
        self.list_groups_impl(window).await
    }

    async fn update_group(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        self.update_group_impl(group_id, update).await
    }

    async fn delete_group(&self, group_id: i64) -> Result<bool> {
        self.delete_group_impl(group_id).await
    }

    // 作业模块
    async fn create_homework(&self, homework: CreateHomeworkRequest) -> Result<Homework> {
        self.create_homework_impl(homework).await
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(homework_id).await
    }

    async fn list_homeworks(&self, window: PageWindow) -> Result<Vec<Homework>> {
        self.list_homeworks_impl(window).await
    }

    async fn list_homeworks_by_group(&self, group_id: i64) -> Result<Vec<Homework>> {
        self.list_homeworks_by_group_impl(group_id).await
    }

    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        self.update_homework_impl(homework_id, update).await
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        self.delete_homework_impl(homework_id).await
    }

    // 附件模块
    async fn create_attachment(&self, attachment: CreateAttachmentRequest) -> Result<Attachment> {
        self.create_attachment_impl(attachment).await
    }

    async fn get_attachment_by_id(&self, attachment_id: i64) -> Result<Option<Attachment>> {
        self.get_attachment_by_id_impl(attachment_id).await
    }

    async fn list_attachments(&self, window: PageWindow) -> Result<Vec<Attachment>> {
        self.list_attachments_impl(window).await
    }

    async fn list_attachments_by_homework(&self, homework_id: i64) -> Result<Vec<Attachment>> {
        self.list_attachments_by_homework_impl(homework_id).await
    }

    async fn update_attachment(
        &self,
        attachment_id: i64,
        update: UpdateAttachmentRequest,
    ) -> Result<Option<Attachment>> {
        self.update_attachment_impl(attachment_id, update).await
    }

    async fn delete_attachment(&self, attachment_id: i64) -> Result<bool> {
        self.delete_attachment_impl(attachment_id).await
    }

    // 用户分组模块
    async fn create_user_group(&self, user_group: CreateUserGroupRequest) -> Result<UserGroup> {
        self.create_user_group_impl(user_group).await
    }

    async fn get_user_group(&self, user_id: i64, group_id: i64) -> Result<Option<UserGroup>> {
        self.get_user_group_impl(user_id, group_id).await
    }

    async fn list_user_groups(&self, window: PageWindow) -> Result<Vec<UserGroup>> {
        self.list_user_groups_impl(window).await
    }

    async fn list_user_groups_by_user(&self, user_id: i64) -> Result<Vec<UserGroup>> {
        self.list_user_groups_by_user_impl(user_id).await
    }

    async fn list_user_groups_by_group(&self, group_id: i64) -> Result<Vec<UserGroup>> {
        self.list_user_groups_by_group_impl(group_id).await
    }

    async fn update_user_group(
        &self,
        user_id: i64,
        group_id: i64,
        update: UpdateUserGroupRequest,
    ) -> Result<Option<UserGroup>> {
        self.update_user_group_impl(user_id, group_id, update).await
    }

    async fn delete_user_group(&self, user_id: i64, group_id: i64) -> Result<bool> {
        self.delete_user_group_impl(user_id, group_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school_bot.db").unwrap(),
            "sqlite://school_bot.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/bot").unwrap(),
            "postgres://u:p@localhost/bot"
        );
    }

    #[test]
    fn test_unknown_database_url() {
        let err = SeaOrmStorage::build_database_url("redis://localhost").unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
