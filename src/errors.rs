use anyhow::Result;
use tracing::error;

/// Install the process panic hook: the panic is logged, then reported on stderr
/// (human-panic report in release, full backtrace in debug) and the process exits.
pub fn init() -> Result<()> {
    std::panic::set_hook(Box::new(move |panic_info| {
        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let file_path = handle_dump(&metadata, panic_info);
            if let Err(e) = print_msg(file_path, &metadata) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{}", panic_info);
            eprintln!("\n{}", bug_hint());
        }

        error!("{}", log_line(&panic_info.to_string()));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Panic message as written to the log file, escape codes removed
fn log_line(msg: &str) -> String {
    format!("Panic: {}", strip_ansi_escapes::strip_str(msg))
}

#[cfg_attr(debug_assertions, allow(dead_code))]
fn bug_hint() -> String {
    format!("This is a bug. Consider reporting it at {}", env!("CARGO_PKG_REPOSITORY"))
}
