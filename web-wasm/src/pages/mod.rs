//! ルートごとのページ

pub mod dashboard;
pub mod farmer_dashboard;
pub mod landing;
pub mod not_found;
pub mod tent_showcase;
