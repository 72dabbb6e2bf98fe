//! Query interfaces bound to one backend client and one caller context.

pub mod balance;
pub mod catalogue;
pub mod games;
pub mod sessions;

pub use balance::{BalanceQuery, Scope};
pub use catalogue::CatalogueQuery;
pub use games::GameQuery;
pub use sessions::SessionQuery;
