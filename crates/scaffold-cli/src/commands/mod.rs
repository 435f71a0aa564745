pub mod add;
pub mod common;
pub mod config;
pub mod list;
pub mod listen;
pub mod sync;

pub use add::run_add;
pub use config::run_config;
pub use list::run_list;
pub use listen::run_listen;
pub use sync::run_sync;
