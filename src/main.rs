// SPDX-License-Identifier: MPL-2.0
use pics_lens::app::{self, Flags};

const HELP: &str = "\
PicsLens - integrative practices with an accessibility magnifier

USAGE:
  pics_lens [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <LOCALE>      UI language (e.g. en-US, pt-BR)
      --config-dir <DIR>   Directory holding settings.toml
      --magnifier          Enable the magnifier lens for this session

ENVIRONMENT:
  PICS_LENS_CONFIG_DIR     Same as --config-dir
  RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });
    let magnifier = args.contains("--magnifier");

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        lang,
        config_dir,
        magnifier,
    })
}
