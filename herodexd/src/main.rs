use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use clap::Parser;
use herodex_common::db::Database;
use std::process::ExitCode;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "herodexd",
    long_about = None
)]
pub struct Herodexd {
    #[command(flatten)]
    pub database: herodex_common::config::Database,

    #[command(flatten)]
    pub http: Http,
}

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "HTTP")]
#[group(id = "http")]
pub struct Http {
    #[arg(id = "http-bind", long, env = "HTTP_BIND", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(id = "http-port", long, env = "HTTP_PORT", default_value_t = 5555)]
    pub port: u16,
}

impl Herodexd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        let db = Database::new(&self.database).await?;

        let openapi = herodex_module_fundamental::openapi();

        log::info!("listening on {}:{}", self.http.bind, self.http.port);

        HttpServer::new(move || {
            let db = db.clone();
            let openapi = openapi.clone();
            App::new()
                .wrap(middleware::Logger::default())
                .configure(|config| herodex_module_fundamental::configure(config, db))
                .route(
                    "/openapi.json",
                    web::get().to(move || {
                        let openapi = openapi.clone();
                        async move { HttpResponse::Ok().json(openapi) }
                    }),
                )
        })
        .bind((self.http.bind.clone(), self.http.port))?
        .run()
        .await?;

        Ok(ExitCode::SUCCESS)
    }
}

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::init();
    Herodexd::parse().run().await
}
