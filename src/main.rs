use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match guestbook::start_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {e}");
            eprintln!("Server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
