pub mod decimal;
pub mod game;
pub mod listing;
pub mod session;
pub mod stats;
pub mod transaction;

pub use decimal::*;
pub use game::*;
pub use listing::*;
pub use session::*;
pub use stats::*;
pub use transaction::*;
