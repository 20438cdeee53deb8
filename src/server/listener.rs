//! Listener construction
//!
//! Builds the TCP listener through socket2 for explicit control over socket
//! options before the listen call.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create and bind the listening socket.
///
/// `SO_REUSEADDR` is set so the port can be rebound through a `TIME_WAIT`
/// remnant. `SO_REUSEPORT` is not: a second process binding the port while
/// this one is alive must fail.
pub fn bind(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode is required before handing the socket to tokio
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
