pub mod create;
pub use create::CreateOrphanage;

pub mod detail;
pub use detail::OrphanageDetail;

pub mod photos;
