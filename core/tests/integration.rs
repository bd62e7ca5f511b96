//! Card lookups against the live mock catalog.
//!
//! # Design
//! Starts the mock server on a random port, then drives build → execute →
//! parse over real HTTP using ureq as the host. Validates that the core's
//! URL encoding and decoding agree with the server's schema.

use catalog_core::{
    render_card, ApiError, CatalogClient, HttpMethod, HttpRequest, HttpResponse, QueryParameter,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data and the core does the classification.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(req.url.as_str()).call(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_vec().unwrap_or_default();

    HttpResponse { status, body }
}

/// Bind the mock catalog on a random port and return its base URL.
fn start_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn lookup_lifecycle() {
    let client = CatalogClient::new(&start_mock_server());

    // Opt has two printings in the fixture set.
    let req = client
        .build_search_cards(&[QueryParameter::name("Opt")])
        .unwrap();
    let resp = client.parse_search_cards(execute(req)).unwrap();
    assert_eq!(resp.cards().len(), 2);
    let mmq = resp
        .cards()
        .iter()
        .find(|c| c.card_set.as_deref() == Some("MMQ"))
        .expect("MMQ printing");
    assert_eq!(mmq.set_name.as_deref(), Some("Mercadian Masques"));
    assert_eq!(mmq.text.as_deref(), Some("Draw two cards."));

    // Space in the name survives encoding.
    let req = client
        .build_search_cards(&[QueryParameter::name("Black Lotus")])
        .unwrap();
    let resp = client.parse_search_cards(execute(req)).unwrap();
    assert_eq!(resp.cards().len(), 1);
    assert_eq!(resp.cards()[0].mana_cost.as_deref(), Some("{0}"));

    // Extra filters narrow the result.
    let req = client
        .build_search_cards(&[QueryParameter::name("Opt"), QueryParameter::new("set", "XLN")])
        .unwrap();
    let resp = client.parse_search_cards(execute(req)).unwrap();
    assert_eq!(resp.cards().len(), 1);
    assert_eq!(resp.cards()[0].set_name.as_deref(), Some("Ixalan"));

    // Fields the server omits decode as absent and render as Unknown.
    let req = client
        .build_search_cards(&[QueryParameter::name("Island")])
        .unwrap();
    let resp = client.parse_search_cards(execute(req)).unwrap();
    let island = &resp.cards()[0];
    assert!(island.mana_cost.is_none());
    assert!(island.text.is_none());
    let rendered = render_card(island);
    assert!(rendered.contains("Mana Cost: Unknown"));
    assert!(rendered.contains("Text: Unknown"));

    // No match is an empty result, not an error.
    let req = client
        .build_search_cards(&[QueryParameter::name("Nonexistent")])
        .unwrap();
    let resp = client.parse_search_cards(execute(req)).unwrap();
    assert!(resp.is_empty());

    // Empty name is rejected by the server.
    let req = client
        .build_search_cards(&[QueryParameter::name("")])
        .unwrap();
    let err = client.parse_search_cards(execute(req)).unwrap_err();
    assert_eq!(err, ApiError::BadRequest);

    // Wrong resource path.
    let wrong = CatalogClient::new(&format!("{}/nope", client.base_url()));
    let req = wrong
        .build_search_cards(&[QueryParameter::name("Opt")])
        .unwrap();
    let err = wrong.parse_search_cards(execute(req)).unwrap_err();
    assert_eq!(err, ApiError::NotFound);
}
