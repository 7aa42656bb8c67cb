#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    /// Path of the SQLite database file, created on first start.
    #[arg(id = "db-path", long, env = "DB_PATH", default_value = "herodex.db")]
    pub path: String,
}
