//! dump-parsed: render a parsed module snapshot as normalized YAML.
//!
//! ```bash
//! dump-parsed build/linux/parsed_output.bin
//! dump-parsed build/linux/parsed_output.bin linux_dump.yml
//! PARSED_DUMP_LOG=debug dump-parsed parsed_output.bin
//! ```

use std::process::ExitCode;

use parsed_dump::cli::{execute, init_logging};

fn main() -> ExitCode {
    init_logging();
    let code = execute(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    ExitCode::from(code)
}
