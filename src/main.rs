use clap::Parser;
use log10_feedback::application::client::FeedbackClient;
use log10_feedback::application::config::Config;
use log10_feedback::cli::{Cli, run};
use log10_feedback::error::AppError;
use log10_feedback::utils::logger::setup_logger;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();
    let cli = Cli::parse();

    let client = FeedbackClient::new(Config::new())?;
    let mut stdout = std::io::stdout().lock();
    run(&client, &cli.command, &mut stdout).await
}
