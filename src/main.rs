use std::process::ExitCode;

fn main() -> ExitCode {
    lbranch::cli::run()
}
