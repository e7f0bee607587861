// SPDX-License-Identifier: MPL-2.0
use policy_portal::app::{self, paths, Flags};
use policy_portal::i18n::Language;
use policy_portal::logging;
use policy_portal::ui::theming::ThemeMode;

const HELP: &str = "\
policy_portal

USAGE:
  policy_portal [OPTIONS]

OPTIONS:
  --lang <en|fr|ar>       Interface language for this session
  --theme <light|dark>    Color theme for this session
  --config-dir <PATH>     Directory holding settings.toml and preferences.toml
  -h, --help              Print this help
";

fn parse_language(value: &str) -> Result<Language, String> {
    Language::parse(value).ok_or_else(|| format!("unknown language '{value}'"))
}

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(value).ok_or_else(|| format!("unknown theme '{value}'"))
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_fn("--lang", parse_language)?,
        theme: args.opt_value_from_fn("--theme", parse_theme)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

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
