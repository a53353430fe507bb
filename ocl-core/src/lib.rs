pub mod db;
pub mod entities;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;
