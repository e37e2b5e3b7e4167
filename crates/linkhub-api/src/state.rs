//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use linkhub_core::config::AppConfig;

use linkhub_database::repositories::folder::FolderRepository;
use linkhub_database::repositories::link_folder::LinkFolderRepository;

use linkhub_service::folder::default::DefaultFolderService;
use linkhub_service::folder::service::FolderService;
use linkhub_service::folder::tree::TreeService;
use linkhub_service::link::service::LinkFolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Folder repository
    pub folder_repo: Arc<FolderRepository>,
    /// Link-folder association repository
    pub link_folder_repo: Arc<LinkFolderRepository>,

    /// Folder mutation service
    pub folder_service: Arc<FolderService>,
    /// Folder tree read service
    pub tree_service: Arc<TreeService>,
    /// Default-folder guarantee service
    pub default_folder_service: Arc<DefaultFolderService>,
    /// Link-folder membership service
    pub link_folder_service: Arc<LinkFolderService>,
}
