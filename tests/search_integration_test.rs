use httpmock::prelude::*;
use price_scout::{
    HttpFetcher, PriceFormat, SearchEngine, SelectorConfig, SiteConfig, SitesConfig,
};
use rust_decimal::Decimal;

fn mock_site(name: &str, server: &MockServer, path: &str) -> SiteConfig {
    SiteConfig {
        name: name.to_string(),
        base_url: server.base_url(),
        search_url: format!("{}{}?q=", server.base_url(), path),
        price_format: PriceFormat::SymbolPrefixed,
        selectors: SelectorConfig {
            container: "div.product".to_string(),
            name: "span.title".to_string(),
            price: "span.price".to_string(),
            link: "a.plink".to_string(),
            image: "img.thumb".to_string(),
        },
    }
}

fn results_page(items: &[(&str, &str, &str)]) -> String {
    let blocks: Vec<String> = items
        .iter()
        .map(|(name, price, href)| {
            format!(
                r#"<div class="product">
                    <a class="plink" href="{href}"><img class="thumb" src="/images/{name}.jpg"></a>
                    <span class="title">{name}</span>
                    <span class="price">{price}</span>
                </div>"#
            )
        })
        .collect();
    format!(
        "<html><body><div id=\"results\">{}</div></body></html>",
        blocks.join("\n")
    )
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_end_to_end_search_merges_and_sorts_two_sites() {
    let server_a = MockServer::start();
    let server_b = MockServer::start();

    let page_a = results_page(&[
        ("Laptop Pro", "$1,299.00", "/products/laptop-pro"),
        ("Laptop Air", "$999.99", "/products/laptop-air"),
    ]);
    let page_b = results_page(&[("Laptop Used", "$450.00", "/itm/laptop-used")]);

    let mock_a = server_a.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "laptop");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(&page_a);
    });
    let mock_b = server_b.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "laptop");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(&page_b);
    });

    let sites = vec![
        mock_site("store-a", &server_a, "/search"),
        mock_site("store-b", &server_b, "/search"),
    ];
    let engine = SearchEngine::new(HttpFetcher::new(), sites).unwrap();

    let results = engine.search("laptop").await;

    mock_a.assert();
    mock_b.assert();
    assert_eq!(results.sites_failed, 0);
    assert_eq!(results.listings.len(), 3);

    let prices: Vec<Decimal> = results.listings.iter().map(|l| l.price).collect();
    assert_eq!(prices, [dec("450.00"), dec("999.99"), dec("1299.00")]);

    let cheapest = &results.listings[0];
    assert_eq!(cheapest.name, "Laptop Used");
    assert_eq!(cheapest.source, "store-b");
    assert_eq!(
        cheapest.link,
        format!("{}/itm/laptop-used", server_b.base_url())
    );
}

#[tokio::test]
async fn test_failing_site_contributes_nothing() {
    let server_up = MockServer::start();
    let server_down = MockServer::start();

    let page = results_page(&[
        ("Kettle", "$39.99", "/p/kettle"),
        ("Toaster", "$24.99", "/p/toaster"),
        ("Blender", "$59.99", "/p/blender"),
    ]);

    let up_mock = server_up.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body(&page);
    });
    let down_mock = server_down.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(500);
    });

    let sites = vec![
        mock_site("down", &server_down, "/search"),
        mock_site("up", &server_up, "/search"),
    ];
    let engine = SearchEngine::new(HttpFetcher::new(), sites).unwrap();

    let results = engine.search("kitchen").await;

    up_mock.assert();
    down_mock.assert();
    assert_eq!(results.sites_failed, 1);

    let names: Vec<&str> = results.listings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Toaster", "Kettle", "Blender"]);
}

#[tokio::test]
async fn test_all_sites_failing_yields_empty_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(503);
    });

    let sites = vec![
        mock_site("a", &server, "/search"),
        mock_site("b", &server, "/search"),
    ];
    let engine = SearchEngine::new(HttpFetcher::new(), sites).unwrap();

    let results = engine.search("anything").await;
    assert!(results.listings.is_empty());
    assert_eq!(results.sites_failed, 2);
}

#[tokio::test]
async fn test_empty_body_counts_as_site_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body("   ");
    });

    let engine =
        SearchEngine::new(HttpFetcher::new(), vec![mock_site("blank", &server, "/search")])
            .unwrap();

    let results = engine.search("anything").await;
    assert!(results.listings.is_empty());
    assert_eq!(results.sites_failed, 1);
}

#[tokio::test]
async fn test_keyword_is_urlencoded_on_the_wire() {
    let server = MockServer::start();
    let page = results_page(&[("Desk Lamp", "$15.00", "/p/desk-lamp")]);

    // reqwest sends the raw query string; httpmock decodes + for us.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "desk lamp");
        then.status(200).body(&page);
    });

    let engine =
        SearchEngine::new(HttpFetcher::new(), vec![mock_site("shop", &server, "/search")])
            .unwrap();

    let results = engine.search("desk lamp").await;
    mock.assert();
    assert_eq!(results.listings.len(), 1);
}

#[tokio::test]
async fn test_sites_file_round_trip_through_engine() {
    let server = MockServer::start();
    let page = results_page(&[("Monitor", "$189.50", "/p/monitor")]);
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body(&page);
    });

    let toml = format!(
        r#"
        [[sites]]
        name = "mock-shop"
        base_url = "{base}"
        search_url = "{base}/search?q="
        price_format = "symbol-prefixed"

        [sites.selectors]
        container = "div.product"
        name = "span.title"
        price = "span.price"
        link = "a.plink"
        image = "img.thumb"
        "#,
        base = server.base_url()
    );

    let sites = SitesConfig::from_toml_str(&toml).unwrap();
    let engine = SearchEngine::new(HttpFetcher::new(), sites.sites).unwrap();

    let results = engine.search("monitor").await;
    assert_eq!(results.listings.len(), 1);
    assert_eq!(results.listings[0].price, dec("189.50"));
    assert_eq!(results.listings[0].source, "mock-shop");
}
