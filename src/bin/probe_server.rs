use game_status_backend::services::game_query::GameQueryService;

// Quick manual probe: `probe_server <ip> <port>` against QUERY_URL
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let ip = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = args.next().and_then(|p| p.parse().ok()).unwrap_or(7777);
    let base_url = std::env::var("QUERY_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

    let query = GameQueryService::new(base_url, 8, 12);

    match query.fetch_info(&ip, port).await {
        Ok(info) => println!("INFO: {}", serde_json::to_string_pretty(&info)?),
        Err(e) => println!("INFO FAILED: {}", e),
    }

    match query.fetch_players(&ip, port).await {
        Ok(players) => println!(
            "PLAYERS ({}): {}",
            players.len(),
            serde_json::to_string_pretty(&players)?
        ),
        Err(e) => println!("PLAYERS FAILED: {}", e),
    }

    Ok(())
}
