use atrium::flags::Flags;
use atrium::shell::Shell;
use std::env;
use std::path::Path;

fn main() -> Result<(), atrium::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Atrium {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut shell = Shell::new(&flags);
    match flags.script() {
        Some(script) => shell.run_file(Path::new(script)),
        None => shell.run(),
    }
}
