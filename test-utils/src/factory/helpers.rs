//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a folder chain `depth` levels deep for a user.
///
/// The first folder sits at the root and every following folder is a child of the
/// previous one. Useful for cascade tests that must not assume a bounded tree depth.
///
/// # Arguments
/// - `db` - Database connection
/// - `uid` - Owner of the folders
/// - `depth` - Number of nested folders to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Folders ordered from the root downwards
/// - `Err(DbErr)` - Database error during creation
pub async fn create_folder_chain(
    db: &DatabaseConnection,
    uid: i32,
    depth: usize,
) -> Result<Vec<entity::article::Model>, DbErr> {
    let mut folders = Vec::with_capacity(depth);
    let mut pid = 0;

    for _ in 0..depth {
        let folder = crate::factory::article::ArticleFactory::new(db, uid)
            .folder(true)
            .pid(pid)
            .build()
            .await?;
        pid = folder.id;
        folders.push(folder);
    }

    Ok(folders)
}
