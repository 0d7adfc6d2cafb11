use google_sheets4::{hyper, hyper_rustls};

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

pub fn http_client() -> hyper::Client<HttpsConnector> {
    hyper::Client::builder().build(
        hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .expect("no native root CA certificates found")
            .https_or_http()
            .enable_http1()
            .build(),
    )
}
