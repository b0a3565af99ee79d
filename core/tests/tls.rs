//! TLS trust behavior against a self-signed local server.
//!
//! # Design
//! The mock server serves its routes over TLS with a bundled
//! self-signed certificate. With default trust the handshake must
//! fail; with `ignore_tls_errors` the same request must succeed.

use request_core::RequestError;
use serde_json::Value;

/// Starts the TLS mock server on a random port, returns its base URL.
fn start_tls_server() -> String {
    // Both ureq and axum-server pull in rustls; pin the process-wide
    // crypto provider so neither side has to guess.
    rustls::crypto::ring::default_provider().install_default().ok();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            mock_server::run_tls(
                listener,
                mock_server::CERT_PEM.to_vec(),
                mock_server::KEY_PEM.to_vec(),
            )
            .await
        })
        .unwrap();
    });

    format!("https://{addr}")
}

#[test]
fn self_signed_certificate_is_rejected_by_default() {
    let base = start_tls_server();
    let err = request_core::get(&format!("{base}/inspect"), &[], &[], false).unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
}

#[test]
fn self_signed_certificate_is_accepted_when_ignoring_tls_errors() {
    let base = start_tls_server();
    let text = request_core::get(&format!("{base}/inspect"), &[], &[("id", "42")], true)
        .unwrap()
        .expect("expected an inspection body");

    let seen: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(seen["method"], "GET");
    assert_eq!(seen["query"], "id=42");
}
