// SPDX-License-Identifier: MPL-2.0
use solarshare::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
SolarShare - solar energy sharing sign-in

USAGE:
  solarshare [OPTIONS]

OPTIONS:
  -h, --help               Print this help message
      --lang <id>          Interface language (e.g. en-US, fr)
      --config-dir <path>  Directory holding settings.toml
      --i18n-dir <path>    Directory with additional .ftl translations

ENVIRONMENT:
  SOLARSHARE_CONFIG_DIR    Config directory when --config-dir is absent
  RUST_LOG                 Log filter (default: solarshare=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("solarshare=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
