// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match docs_conf::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // 代替表示 {:#} で原因の連鎖まで出力する
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
