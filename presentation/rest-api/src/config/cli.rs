use clap::{Args, Parser, Subcommand, ValueEnum};

/// Shopping cart service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Starts the server listening on the provided address
    Start(StartArgs),
}

/// Backend holding the carts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreMode {
    /// Process-local map, lost on restart
    Memory,
    /// Redis, one record per user
    Cache,
    /// PostgreSQL / YugabyteDB, one row per cart item
    Sql,
}

#[derive(Args, Debug)]
pub struct StartArgs {
    /// IP the server binds to
    #[arg(short = 'H', long, env = "LISTEN_ADDR", default_value = "0.0.0.0")]
    pub hostname: String,

    /// Port the server listens on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Redis address (host:port or redis:// URL)
    #[arg(short, long, env = "REDIS_ADDR")]
    pub redis: Option<String>,

    /// Cart backend; defaults to cache when a Redis address is set, memory otherwise
    #[arg(long, env = "CART_STORE", value_enum)]
    pub store: Option<StoreMode>,

    /// PostgreSQL connection string, required by the sql backend
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}
