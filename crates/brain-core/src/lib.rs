pub mod color;
pub mod config;
pub mod connections;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod mock;
pub mod placement;
pub mod quota;
pub mod sampling;
pub mod style;
pub mod topic;

pub use color::*;
pub use config::*;
pub use connections::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use mock::*;
pub use placement::*;
pub use quota::*;
pub use style::*;
pub use topic::*;
