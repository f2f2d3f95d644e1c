use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_reservation::{
    config::Config,
    reservation_client::ReservationClient,
    view::{render::render, ReservationView},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seat reservation client");
    info!("Reservation service at {}", config.service.base_url);

    let client = ReservationClient::from_config(&config.service);
    let mut view = ReservationView::new(client);

    // Initial seat-map load, then the interactive reserve loop.
    view.load_seats().await;
    println!("{}", render(view.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Number of seats to reserve (max 7), 'r' to refresh, 'q' to quit: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "refresh" => view.load_seats().await,
            raw => view.reserve_seats(raw).await,
        }
        println!("{}", render(view.state()));
    }

    Ok(())
}
