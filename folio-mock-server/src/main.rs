use anyhow::Context;
use folio_mock_server::{router, MockServer, SharedMockServer};
use std::net::SocketAddr;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Port to listen on
    #[structopt(short, long, default_value = "3000")]
    port: u16,

    /// Publish comments without waiting for approval
    #[structopt(long)]
    auto_approve: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    let server = SharedMockServer::new(MockServer::new().with_auto_approve(opt.auto_approve));

    let addr = SocketAddr::from(([127, 0, 0, 1], opt.port));
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(router(server).into_make_service())
        .await
        .context("serving axum webserver")
}
