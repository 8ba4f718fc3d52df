// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

const HELP: &str = "\
iced_toast: notification presenter with timed auto-dismiss

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --message <TEXT>      Show a notification as soon as the window opens
  --kind <KIND>         success, error, warning or info
  --duration <MS>       Auto-hide delay in milliseconds
  --no-auto-hide        Keep notifications until closed
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to initialize logger: {err}");
    }

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        message: args.opt_value_from_str("--message")?,
        kind: args.opt_value_from_str("--kind")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        no_auto_hide: args.contains("--no-auto-hide"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok(flags)
}
