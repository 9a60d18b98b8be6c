// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, create an API client and hand it to
//   the UI loop.
// - Returns `anyhow::Result` so setup errors print with their context.

use putio::{api::ApiClient, config::TokenStore, ui::main_menu};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // `PUTIO_TOKEN` wins; otherwise reuse the token saved by a previous login.
    let store = TokenStore::in_home_dir();
    let mut api = ApiClient::from_env()?;
    if !api.has_token() {
        if let Some(token) = store.load()? {
            api = api.with_token(token);
        }
    }

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api, store)?;
    Ok(())
}
