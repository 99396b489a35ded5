use cornerstone::app::{self, paths, Flags};

const HELP: &str = "\
Cornerstone - church building fund campaign app

USAGE:
  cornerstone [OPTIONS]

OPTIONS:
  -h, --help          Print this help
  --lang <LOCALE>     Override the UI language (e.g. en-US)
  --i18n-dir <DIR>    Load Fluent catalogs from DIR instead of the embedded set
  --config-dir <DIR>  Read and write settings under DIR
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    // The config override must be registered before the first config::load
    // inside App::new.
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
