// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use typoclone::app::{self, Flags};
use typoclone::error::Result;

const ENV_LOG: &str = "TYPOCLONE_LOG";

const HELP: &str = "\
TypoClone 3D - re-render 3D lettering with a new word

USAGE:
    typoclone [OPTIONS] [IMAGE]

OPTIONS:
    --lang <LOCALE>        Interface language (e.g. en-US, fr)
    --config-dir <DIR>     Directory holding settings.toml
    --data-dir <DIR>       Directory holding state.cbor
    --log-level <FILTER>   Log filter (e.g. info, typoclone=debug)
    -h, --help             Print this help

ENVIRONMENT:
    GEMINI_API_KEY         API key for the generative model service
    TYPOCLONE_LOG          Log filter when --log-level is absent
    TYPOCLONE_CONFIG_DIR   Same as --config-dir
    TYPOCLONE_DATA_DIR     Same as --data-dir
";

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
        eprintln!("ignoring --log-level: {err}");
        None
    });
    init_tracing(log_level.as_deref());

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        data_dir: opt_string(&mut args, "--data-dir"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)?;
    Ok(())
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%key, %err, "ignoring invalid argument");
        None
    })
}

fn init_tracing(cli_filter: Option<&str>) {
    let filter = match cli_filter {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_env(ENV_LOG).ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
