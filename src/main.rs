// SPDX-License-Identifier: MPL-2.0
use community_site::app::{self, Flags, Screen};
use community_site::config;
use community_site::gallery::{discover, DiscoveryConfig};
use community_site::site::{self, HttpFetcher};
use community_site::store::Backend;
use std::process::ExitCode;

const HELP: &str = "\
community_site

USAGE:
  community_site [OPTIONS] [PAGE]

ARGS:
  PAGE                 Page to open first (e.g. gallery.html)

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --base-url <url>     Site location, URL or local folder
  --list-photos        Print the gallery photo URLs and exit
  -h, --help           Print this help
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    base_url: Option<String>,
    list_photos: bool,
    page: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        base_url: args.opt_value_from_str("--base-url")?,
        list_photos: args.contains("--list-photos"),
        page: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    }))
}

fn main() -> ExitCode {
    community_site::logging::init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    app::paths::init_cli_overrides(args.config_dir);
    let (config, config_warning) = config::load();

    let raw_base = args.base_url.as_deref().unwrap_or(&config.site.base_url);
    let base_url = match site::parse_base_url(raw_base) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("error: invalid base URL {raw_base}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.list_photos {
        return list_photos(&fetcher, &base_url, &config);
    }

    let store = match Backend::from_config(&config.store) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let screen = args
        .page
        .as_deref()
        .and_then(Screen::from_page)
        .unwrap_or_default();

    let flags = Flags {
        lang: args.lang,
        config,
        config_warning,
        base_url,
        screen,
        fetcher,
        store,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

/// Runs discovery without a window and prints one photo URL per line.
fn list_photos(fetcher: &HttpFetcher, base_url: &url::Url, config: &config::Config) -> ExitCode {
    let discovery_config = match DiscoveryConfig::from_config(base_url, &config.gallery) {
        Ok(discovery_config) => discovery_config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let discovery = runtime.block_on(discover(fetcher, &discovery_config));

    for item in &discovery.items {
        match discovery_config.resolver.photo_url(&item.name) {
            Ok(url) => println!("{url}"),
            Err(err) => tracing::warn!(name = %item.name, %err, "photo URL cannot be built"),
        }
    }
    ExitCode::SUCCESS
}
