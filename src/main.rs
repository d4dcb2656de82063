use alankara::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap_or(None),
        config_path: args.opt_value_from_str("--config").unwrap_or(None),
    };

    app::run(flags)
}
