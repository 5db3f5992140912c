use std::io::Write;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use actix_web::{post, web, App, HttpResponse, HttpServer};

use tickback::exchange::{Order, OrderResponse, Trade};

/// What the scripted engine does with every order it receives.
#[derive(Clone, Copy, Debug)]
pub enum EngineMode {
    /// Fill the full quantity at this price, aggressor side = order side.
    FillAt(f64),
    /// Answer 200 with an explicit empty trades array.
    NoFills,
    /// Answer 200 with a body that has no trades field at all.
    OmitTrades,
    /// Answer with this non-2xx status.
    Reject(u16),
}

pub type ReceivedOrders = Arc<Mutex<Vec<Order>>>;

#[post("/order")]
async fn order(
    mode: web::Data<EngineMode>,
    received: web::Data<ReceivedOrders>,
    payload: web::Json<Order>,
) -> HttpResponse {
    let order = payload.into_inner();
    received.lock().unwrap().push(order.clone());

    match mode.get_ref() {
        EngineMode::FillAt(price) => HttpResponse::Ok().json(OrderResponse {
            trades: Some(vec![Trade::new(order.qty, *price, order.side)]),
        }),
        EngineMode::NoFills => HttpResponse::Ok().json(OrderResponse {
            trades: Some(vec![]),
        }),
        EngineMode::OmitTrades => HttpResponse::Ok().json(serde_json::json!({
            "bookUpdate": { "ts": order.ts, "symbol": order.symbol }
        })),
        EngineMode::Reject(status) => {
            HttpResponse::build(actix_web::http::StatusCode::from_u16(*status).unwrap())
                .body("rejected")
        }
    }
}

/// Spawns the scripted engine on an OS-assigned port. Returns the order
/// endpoint url and the orders the engine has received so far. The server
/// thread lives for the rest of the test process.
pub fn spawn_engine(mode: EngineMode) -> (String, ReceivedOrders) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let received: ReceivedOrders = Arc::new(Mutex::new(Vec::new()));
    let received_handle = received.clone();

    thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            HttpServer::new(move || {
                App::new()
                    .app_data(web::Data::new(mode))
                    .app_data(web::Data::new(received_handle.clone()))
                    .service(order)
            })
            .workers(1)
            .listen(listener)
            .unwrap()
            .run()
            .await
            .unwrap();
        });
    });

    (format!("http://{addr}/order"), received)
}

/// Writes a tick file with the canonical header. Rows are (ts, symbol,
/// price, side).
pub fn write_ticks_csv(rows: &[(i64, &str, f64, &str)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ts,symbol,price,side").unwrap();
    for (ts, symbol, price, side) in rows {
        writeln!(file, "{ts},{symbol},{price},{side}").unwrap();
    }
    file.flush().unwrap();
    file
}
