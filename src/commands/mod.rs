//! Command implementations for garb.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command (except `init`) resolves the `.garb/`
//! context, builds a file-backed engine, and runs one engine operation.

mod find;
mod init;
mod pick;
mod reset;
mod status;
mod sync;
mod wear;


use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Pick(args) => pick::cmd_pick(args),
        Command::Wear(args) => wear::cmd_wear(args),
        Command::Status => status::cmd_status(),
        Command::Reset(args) => reset::cmd_reset(args),
        Command::Sync(args) => sync::cmd_sync(args),
        Command::Find(args) => find::cmd_find(args),
    }
}
