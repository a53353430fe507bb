use super::*;

mod read_only;
mod read_write;

type Result<T> = std::result::Result<T, ocl_core::RepoError>;
use ocl_core::entities::*;
use ocl_core::repositories::*;
