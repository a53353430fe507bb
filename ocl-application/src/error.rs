use ocl_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use ocl_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ocl_core::usecases::Error> for AppError {
    fn from(err: ocl_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ocl_entities::password::PasswordParseError> for AppError {
    fn from(err: ocl_entities::password::PasswordParseError) -> Self {
        BError::from(err).into()
    }
}

impl From<ocl_entities::participant::UsernameParseError> for AppError {
    fn from(err: ocl_entities::participant::UsernameParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<ocl_entities::password::PasswordParseError> for BError {
    fn from(_: ocl_entities::password::PasswordParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<ocl_entities::participant::UsernameParseError> for BError {
    fn from(_: ocl_entities::participant::UsernameParseError) -> Self {
        Self::Parameter(ParameterError::Username)
    }
}
