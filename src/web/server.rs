//! actix-web binding for the request handler

use std::net::ToSocketAddrs;
use std::sync::Mutex;

use actix_web::{http::StatusCode, post, web, App, HttpResponse, HttpServer, Responder};

use crate::config::Config;
use crate::engine::Interpreter;
use crate::web::handle_request;

#[post("/execute")]
async fn execute(interpreter: web::Data<Mutex<Interpreter>>, body: web::Bytes) -> impl Responder {
    let reply = {
        let mut interpreter = interpreter
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        handle_request(&mut interpreter, &body)
    };
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(reply.body)
}

/// Serve `POST /execute` on `addr` until the server is stopped.
///
/// All requests share one session.
pub fn serve(config: &Config, addr: impl ToSocketAddrs) -> anyhow::Result<()> {
    let interpreter = web::Data::new(Mutex::new(Interpreter::from_config(config)?));

    actix_web::rt::System::new().block_on(async move {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(interpreter.clone())
                .service(execute)
        })
        .bind(addr)?;

        tracing::info!(addrs = ?server.addrs(), "listening for queries");
        server.run().await
    })?;

    Ok(())
}
