use h1req::{Request, headers::HeaderMap, h1::driver::read_request_async};
use tokio::net::{TcpListener, TcpStream};

const DEFAULT_ADDR: &str = "0.0.0.0:42069";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");

    loop {
        let (io, peer) = match listener.accept().await {
            Ok(ok) => ok,
            Err(err) => {
                log::error!("failed to accept connection: {err}");
                continue;
            }
        };

        tokio::spawn(async move {
            log::info!("connection established: {peer}");
            handle(io).await;
            log::info!("connection terminated: {peer}");
        });
    }
}

async fn handle(io: TcpStream) {
    match read_request_async(io).await {
        Ok(req) => print!("{}", render(req)),
        Err(err) => log::error!("failed to read request: {err}"),
    }
}

// ===== Output =====

fn render(req: Request) -> String {
    let (line, headers) = req.into_parts();
    let mut out = String::new();

    if let Some(line) = line {
        out.push_str("Request line:\n");
        out.push_str(&format!("- Method: {}\n", line.method()));
        out.push_str(&format!("- Target: {}\n", line.target()));
        out.push_str(&format!("- Version: {}\n", line.version().number()));
    }

    out.push_str("Headers:\n");
    out.push_str(&render_headers(&headers));
    out
}

fn render_headers(headers: &HeaderMap) -> String {
    let mut headers = headers.iter().collect::<Vec<_>>();
    headers.sort_unstable();
    headers
        .into_iter()
        .map(|(name, value)| format!("- {name}: {value}\n"))
        .collect()
}

#[cfg(test)]
mod test {
    use super::render;
    use h1req::h1::driver::read_request;

    #[test]
    fn test_render() {
        let input = b"GET /coffee HTTP/1.1\r\nUser-Agent: curl\r\nHost: localhost:42069\r\n\r\n";
        let req = read_request(&input[..]).unwrap();

        assert_eq!(
            render(req),
            "Request line:\n\
            - Method: GET\n\
            - Target: /coffee\n\
            - Version: 1.1\n\
            Headers:\n\
            - host: localhost:42069\n\
            - user-agent: curl\n"
        );
    }
}
