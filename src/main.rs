use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = dev_notes::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
