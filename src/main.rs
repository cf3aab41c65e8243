// SPDX-License-Identifier: MPL-2.0
use product_showcase::app::{self, Flags};

const HELP: &str = "\
Usage: product_showcase [OPTIONS]

Options:
  --lang <id>          UI language (e.g. en-US, fr)
  --api-base <url>     Product API base URL [default: http://localhost:5000]
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: option_arg(&mut args, "--lang"),
        api_base: option_arg(&mut args, "--api-base"),
        config_dir: option_arg(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

/// Reads an optional `--name <value>` pair, reporting malformed values.
fn option_arg(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    args.opt_value_from_str(name).unwrap_or_else(|err| {
        eprintln!("Invalid value for {name}: {err}");
        None
    })
}
