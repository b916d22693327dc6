pub use db::Database;

mod db;

pub mod media;
pub mod pages;
pub mod publish;
pub mod sections;
pub mod sites;

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
