use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

/// The bundled browser client, served at the root route.
const PAGE: &str = include_str!("../../static/index.html");

pub struct Server;

impl Server {
    pub async fn run(args: Args) -> Result<(), std::io::Error> {
        let state = web::Data::new(Gateway::default());
        log::info!("starting hosting server on {}:{}", args.host, args.port);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/", web::get().to(index))
                .route("/ws", web::get().to(socket))
        })
        .workers(4)
        .bind((args.host.as_str(), args.port))?
        .run()
        .await
    }
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(PAGE)
}

async fn socket(
    gateway: web::Data<Gateway>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            gateway.into_inner().bridge(session, stream);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
