mod common;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};

fn test_server() -> TestServer {
    TestServer::new(common::fizzbuzz_app(common::create_test_state())).unwrap()
}

async fn generate(server: &TestServer, params: &[(&str, &str)]) -> TestResponse {
    let mut request = server.get("/api/v1/fizzbuzz");
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    request.await
}

fn assert_error(response: &TestResponse, kind: &str, message: &str) {
    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["kind"], kind);
    assert_eq!(json["error"]["message"], message);
}

#[tokio::test]
async fn test_fizzbuzz_classic() {
    let server = test_server();

    let response = generate(
        &server,
        &[
            ("int1", "3"),
            ("int2", "5"),
            ("limit", "15"),
            ("str1", "fizz"),
            ("str2", "buzz"),
        ],
    )
    .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["result"],
        "1,2,fizz,4,buzz,fizz,7,8,fizz,buzz,11,fizz,13,14,fizzbuzz"
    );
}

#[tokio::test]
async fn test_fizzbuzz_results() {
    let server = test_server();

    let cases = [
        (
            ["3", "5", "15", "foo", "bar"],
            "1,2,foo,4,bar,foo,7,8,foo,bar,11,foo,13,14,foobar",
        ),
        (
            ["3", "5", "20", "fizz", "buzz"],
            "1,2,fizz,4,buzz,fizz,7,8,fizz,buzz,11,fizz,13,14,fizzbuzz,16,17,fizz,19,buzz",
        ),
        (
            ["2", "7", "20", "fizz", "buzz"],
            "1,fizz,3,fizz,5,fizz,buzz,fizz,9,fizz,11,fizz,13,fizzbuzz,15,fizz,17,fizz,19,fizz",
        ),
        (["2", "11", "10", "foo", "bar"], "1,foo,3,foo,5,foo,7,foo,9,foo"),
        (["2", "10", "5", "foo", "bar"], "1,foo,3,foo,5"),
        (
            ["-3", "-5", "15", "fizz", "buzz"],
            "1,2,fizz,4,buzz,fizz,7,8,fizz,buzz,11,fizz,13,14,fizzbuzz",
        ),
    ];

    for ([int1, int2, limit, str1, str2], expected) in cases {
        let response = generate(
            &server,
            &[
                ("int1", int1),
                ("int2", int2),
                ("limit", limit),
                ("str1", str1),
                ("str2", str2),
            ],
        )
        .await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["result"], expected, "int1={int1} int2={int2}");
    }
}

#[tokio::test]
async fn test_fizzbuzz_default_limit() {
    let server = test_server();

    let response = generate(
        &server,
        &[("int1", "3"), ("int2", "5"), ("str1", "fizz"), ("str2", "buzz")],
    )
    .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let result = json["result"].as_str().unwrap();
    assert_eq!(result.split(',').count(), 100);
    assert!(result.ends_with("98,fizz,buzz"));
}

#[tokio::test]
async fn test_fizzbuzz_special_characters_in_strings() {
    let server = test_server();

    let response = generate(
        &server,
        &[
            ("int1", "2"),
            ("int2", "3"),
            ("limit", "6"),
            ("str1", "a&b"),
            ("str2", "é ü"),
        ],
    )
    .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["result"], "1,a&b,é ü,a&b,5,a&bé ü");
}

#[tokio::test]
async fn test_fizzbuzz_validation_errors() {
    let server = test_server();

    let cases = [
        (
            ["0", "5", "15", "fizz", "buzz"],
            "int1 must be different than 0",
        ),
        (
            ["3", "0", "15", "fizz", "buzz"],
            "int2 must be different than 0",
        ),
        (["3", "5", "0", "fizz", "buzz"], "limit must be greater than 0"),
        (["3", "5", "-7", "fizz", "buzz"], "limit must be greater than 0"),
        (["3", "5", "15", "", "buzz"], "str1 must not be empty"),
        (["3", "5", "15", "fizz", ""], "str2 must not be empty"),
        (
            ["3", "3", "15", "fizz", "buzz"],
            "int1 and int2 must be different",
        ),
        // int1 is checked first even though everything else is invalid too
        (["0", "0", "0", "", ""], "int1 must be different than 0"),
    ];

    for ([int1, int2, limit, str1, str2], message) in cases {
        let response = generate(
            &server,
            &[
                ("int1", int1),
                ("int2", int2),
                ("limit", limit),
                ("str1", str1),
                ("str2", str2),
            ],
        )
        .await;

        assert_error(&response, "invalid_input", message);
    }
}

#[tokio::test]
async fn test_fizzbuzz_parse_errors() {
    let server = test_server();

    let cases = [
        (["abc", "5", "15"], "int1"),
        (["3", "xyz", "15"], "int2"),
        (["3", "5", "abc"], "limit"),
        (["abc", "xyz", "abc"], "int1"),
        (["3.5", "5", "15"], "int1"),
    ];

    for ([int1, int2, limit], field) in cases {
        let response = generate(
            &server,
            &[
                ("int1", int1),
                ("int2", int2),
                ("limit", limit),
                ("str1", "fizz"),
                ("str2", "buzz"),
            ],
        )
        .await;

        assert_error(
            &response,
            &format!("failed_to_parse_{field}"),
            &format!("failed to parse {field}"),
        );
    }
}

#[tokio::test]
async fn test_fizzbuzz_missing_parameters() {
    let server = test_server();

    let response = generate(&server, &[]).await;
    assert_error(&response, "failed_to_parse_int1", "failed to parse int1");

    let response = generate(&server, &[("int1", "3")]).await;
    assert_error(&response, "failed_to_parse_int2", "failed to parse int2");

    let response = generate(&server, &[("int1", "3"), ("int2", "5")]).await;
    assert_error(&response, "invalid_input", "str1 must not be empty");
}

#[tokio::test]
async fn test_invalid_request_is_not_counted() {
    let server = test_server();

    let response = generate(
        &server,
        &[
            ("int1", "0"),
            ("int2", "5"),
            ("str1", "fizz"),
            ("str2", "buzz"),
        ],
    )
    .await;
    response.assert_status_bad_request();

    // nothing recorded, so stats has nothing to report
    let response = server.get("/api/v1/fizzbuzz/stats").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_fizzbuzz_store_failure() {
    let server = TestServer::new(common::fizzbuzz_app(common::create_failing_state())).unwrap();

    let response = generate(
        &server,
        &[
            ("int1", "3"),
            ("int2", "5"),
            ("str1", "fizz"),
            ("str2", "buzz"),
        ],
    )
    .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["kind"], "internal_error");
    assert!(json.get("result").is_none());
}
