//! CLI command layer.
//!
//! Each command performs one full refresh (enumerate records, build
//! the catalog, evaluate) and then presents or acts on the result.
//! Nothing here mutates the catalog; a fresh one is built per
//! invocation and discarded on exit.

pub mod config;

mod list;
mod remove;
mod show;

pub use config::Config;
pub use list::list;
pub use remove::remove;
pub use show::show;
