use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::{content::MockContent, server::Server, util::Result};

#[derive(Parser, Debug)]
/// personal portfolio and blog server
pub struct Cli {
  /// address to listen on
  #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
  host: IpAddr,

  /// port to listen on
  #[arg(short, long, env, default_value_t = 8000)]
  port: u16,
}

impl Cli {
  pub fn bind_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }

  pub async fn run(self) -> Result<()> {
    let server = Server::new(self.bind_addr(), MockContent);
    server.run().await
  }
}
