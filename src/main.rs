//! One-shot session token check against a running backend.

use clap::Parser;

use authguard::{AuthGuard, BackendConfig, GuardError, HttpValidator, MemoryCredentialStore, TOKEN_KEY};

#[derive(Parser, Debug)]
#[command(name = "authguard", about = "Validate a session token against the user service")]
struct Cli {
    /// Backend host, e.g. `127.0.0.1:8080`, or a full `http://` base.
    #[arg(long, env = "BACKEND_BASE_URL")]
    base_url: String,

    /// Session token to validate. Omit to exercise the missing-token path.
    #[arg(long, env = "AUTH_TOKEN")]
    token: Option<String>,

    /// Require administrator privilege.
    #[arg(long)]
    need_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), GuardError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = BackendConfig::new(cli.base_url);

    let store = MemoryCredentialStore::new();
    if let Some(token) = cli.token {
        store.set(TOKEN_KEY, token);
    }

    let guard = AuthGuard::new(store, HttpValidator::new(&config));
    guard.check(cli.need_admin).await?;
    println!("validated");
    Ok(())
}
