//! User directory domain: records, progressive fetch results and the
//! repository seam the home screen fetches through.

mod model;
mod repository;
mod resource;

pub use model::{SortType, UserRecord};
pub use repository::{DirectoryError, DirectoryRepository, HomeRepository};
pub use resource::Resource;
