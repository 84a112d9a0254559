use clap::Parser;

/// Command line arguments for the personapi server.
#[derive(Parser, Debug)]
#[command(
    name = "personapi",
    about = "Person registry HTTP service with a declarative request validation core"
)]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0:8080", env = "PERSONAPI_ADDR")]
    pub addr: String,

    /// Print the route table and exit.
    #[arg(long)]
    pub dump_routes: bool,
}
