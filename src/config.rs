//! Configuration for Agora.
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// Agora - in-memory social data store with an HTTP JSON boundary
#[derive(Parser, Debug, Clone)]
#[command(name = "agora")]
#[command(about = "Demo social-networking backend over an in-memory dataset")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:3001")]
    pub listen: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["agora"]);
        assert_eq!(args.listen.port(), 3001);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_listen_override() {
        let args = Args::parse_from(["agora", "--listen", "127.0.0.1:8080"]);
        assert_eq!(args.listen.port(), 8080);
    }
}
