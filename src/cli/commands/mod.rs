mod check;
mod init;
mod seed;
mod verify;

pub use check::cmd_check;
pub use init::cmd_init;
pub use seed::{SeedOverrides, cmd_seed};
pub use verify::cmd_verify;
