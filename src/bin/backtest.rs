use std::env;

use tickback::backtest::run_backtest;
use tickback::client::HttpClient;
use tickback::input::TickSource;
use tickback::strategy::random_taker::RandomTaker;

const DEFAULT_ENGINE_URL: &str = "http://localhost:8080/order";
const DEFAULT_DATA_PATH: &str = "data/sample_ticks.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let engine_url = env::var("ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
    let data_path = env::var("DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    println!("ENGINE_URL: {engine_url}");
    println!("DATA_PATH : {data_path}");

    let source = TickSource::from_csv_path(&data_path)?;
    let mut strategy = RandomTaker::new(0.5, 1.0);
    let mut client = HttpClient::new(engine_url);

    let result = run_backtest(&source, &mut strategy, &mut client)?;

    println!("Backtest done in {:.3}s", result.elapsed.as_secs_f64());
    println!("Final Position: {:.2}", result.position);
    println!("Final Cash: {:.2}", result.cash);
    println!("Final Equity (MtM): {:.2}", result.final_equity());
    println!("Num Orders Sent: {}", result.orders_sent());

    Ok(())
}
