mod cli;
mod server;

pub(crate) use cli::as_cli;
pub(crate) use server::as_server;
