use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    if std::env::var("TLS").is_ok() {
        let listener = std::net::TcpListener::bind(&addr)?;
        println!("listening on https://{addr}");
        mock_server::run_tls(
            listener,
            mock_server::CERT_PEM.to_vec(),
            mock_server::KEY_PEM.to_vec(),
        )
        .await
    } else {
        let listener = TcpListener::bind(&addr).await?;
        println!("listening on http://{addr}");
        mock_server::run(listener).await
    }
}
