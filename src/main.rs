#[tokio::main]
async fn main() -> std::process::ExitCode {
    peggy::start(std::env::args()).await
}
