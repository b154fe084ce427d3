use std::io;
use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::{Builder, Env};
use Classroom_Exercises::menu::session::{Session, SessionConfig};

fn main() -> ExitCode {
    dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cfg = SessionConfig::from_env();
    let session = Session::new(cfg);

    let stdin = io::stdin();
    match session.run(stdin.lock(), io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("🛑 Session ended with an error: {}", e);
            ExitCode::FAILURE
        }
    }
}
