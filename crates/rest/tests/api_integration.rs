//! Integration tests for the top-level resource endpoints.
//!
//! Covers the three representations, paging and the `X-Pagination` header,
//! search and filters, sorting, field shaping, item reads, writes, and
//! the error bodies for invalid query parameters.

mod common;

use axum::http::header::{ACCEPT, ACCESS_CONTROL_EXPOSE_HEADERS, LOCATION, ORIGIN};
use axum::http::{HeaderValue, Method, StatusCode};
use recollectable_persistence::backends::memory::seed;
use recollectable_persistence::entities::{Coin, CollectorValue, Country};
use recollectable_rest::ServerConfig;
use serde_json::{Value, json};

use common::assertions::{assert_no_pagination, assert_problem, keys, pagination, rels};
use common::harness::RestTestHarness;

fn types(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("expected an array body")
        .iter()
        .map(|item| item["Type"].as_str().expect("item without Type"))
        .collect()
}

mod representations {
    use super::*;

    #[tokio::test]
    async fn test_raw_list_has_full_items_and_no_header() {
        let harness = RestTestHarness::new();

        let response = harness.get("/api/coins").await;

        response.assert_status_ok();
        assert_no_pagination(&response);
        let body: Value = response.json();
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert!(body[0].get("Mintage").is_some());
        assert!(body[0].get("links").is_none());
    }

    #[tokio::test]
    async fn test_raw_ignores_fields_but_still_validates_them() {
        let harness = RestTestHarness::new();

        let response = harness.get("/api/coins?fields=Id").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body[0].get("Mintage").is_some());

        let response = harness.get("/api/coins?fields=Bogus").await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_plain_list_has_counts_and_page_links() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/coins?pageSize=2").await;

        response.assert_status_ok();
        assert_eq!(
            pagination(&response),
            json!({
                "totalCount": 6,
                "pageSize": 2,
                "currentPage": 1,
                "totalPages": 3,
                "previousPageLink": null,
                "nextPageLink": "http://localhost/api/coins?orderBy=Value&page=2&pageSize=2",
            })
        );
        let body: Value = response.json();
        assert_eq!(types(&body), ["Pounds", "Euros"]);
    }

    #[tokio::test]
    async fn test_hypermedia_list_wraps_value_and_links() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_hateoas("/api/countries?pageSize=2&page=2")
            .await;

        response.assert_status_ok();
        assert_eq!(
            pagination(&response),
            json!({"totalCount": 6, "pageSize": 2, "currentPage": 2, "totalPages": 3})
        );

        let body: Value = response.json();
        assert_eq!(body["value"].as_array().unwrap().len(), 2);
        assert_eq!(rels(&body["links"]), ["self", "nextPage", "previousPage"]);
        assert_eq!(
            body["links"][0]["href"],
            "http://localhost/api/countries?orderBy=Name&page=2&pageSize=2"
        );

        let item_links = &body["value"][0]["links"];
        assert_eq!(
            rels(item_links),
            [
                "self",
                "create_country",
                "update_country",
                "partially_update_country",
                "delete_country"
            ]
        );
        assert_eq!(item_links[1]["method"], "POST");
        assert_eq!(item_links[1]["href"], "http://localhost/api/countries");
    }

    #[tokio::test]
    async fn test_hypermedia_items_have_no_links_when_shaped() {
        let harness = RestTestHarness::new();

        let response = harness.get_hateoas("/api/countries?fields=Name").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(keys(&body["value"][0]), ["Name", "links"]);
        assert_eq!(body["value"][0]["links"], json!([]));
        assert_eq!(rels(&body["links"]), ["self"]);
    }

    #[tokio::test]
    async fn test_wildcard_accept_is_raw() {
        let harness = RestTestHarness::new();

        let response = harness
            .get("/api/countries")
            .add_header(ACCEPT, HeaderValue::from_static("*/*"))
            .await;

        response.assert_status_ok();
        assert_no_pagination(&response);
    }
}

mod paging {
    use super::*;

    #[tokio::test]
    async fn test_page_size_is_clamped_to_maximum() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/collections?pageSize=1000").await;

        response.assert_status_ok();
        assert_eq!(pagination(&response)["pageSize"], 25);
    }

    #[tokio::test]
    async fn test_default_page_size_per_resource() {
        let harness = RestTestHarness::new();

        let coins = harness.get_plain("/api/coins").await;
        assert_eq!(pagination(&coins)["pageSize"], 25);

        let users = harness.get_plain("/api/users").await;
        assert_eq!(pagination(&users)["pageSize"], 10);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/coins?page=9&pageSize=5").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, json!([]));
        let meta = pagination(&response);
        assert_eq!(meta["totalPages"], 2);
        assert_eq!(meta["nextPageLink"], Value::Null);
        assert!(meta["previousPageLink"].is_string());
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_bad_request() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/coins?page=two").await;

        response.assert_status_bad_request();
        assert_problem(&response.json(), 400, "invalid");
    }
}

mod filtering {
    use super::*;

    #[tokio::test]
    async fn test_type_filter_is_case_insensitive() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/banknotes?type=DOLLARS").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(types(&body), ["Dollars", "Dollars"]);
    }

    #[tokio::test]
    async fn test_country_filter_and_search_combine() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_plain("/api/coins?country=united%20states%20of%20america&search=192")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(types(&body), ["Dollars"]);
    }

    #[tokio::test]
    async fn test_search_matches_any_search_attribute() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/users?search=FREE").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["Name"], "Gavin Free");
    }

    #[tokio::test]
    async fn test_unknown_parameters_are_ignored() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/countries?colour=red").await;

        response.assert_status_ok();
        assert_eq!(pagination(&response)["totalCount"], 6);
    }
}

mod sorting {
    use super::*;

    #[tokio::test]
    async fn test_default_order_for_coins() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/coins?fields=Type").await;

        let body: Value = response.json();
        assert_eq!(
            types(&body),
            ["Pounds", "Euros", "Yen", "Pesos", "Dime", "Dollars"]
        );
    }

    #[tokio::test]
    async fn test_descending_key_reverses_every_path() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_plain("/api/coins?orderBy=value%20desc&fields=Type")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            types(&body),
            ["Dollars", "Dime", "Pesos", "Yen", "Euros", "Pounds"]
        );
    }

    #[tokio::test]
    async fn test_multiple_keys() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_plain("/api/banknotes?orderBy=Country,ReleaseDate%20desc&fields=Type,ReleaseDate")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let dates: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["ReleaseDate"].as_str().unwrap())
            .collect();
        assert_eq!(dates, ["1870", "1984", "1994", "1981", "1963", "1957"]);
    }

    #[tokio::test]
    async fn test_unknown_sort_key_is_bad_request() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/coins?orderBy=Mintage").await;

        response.assert_status_bad_request();
        assert_problem(&response.json(), 400, "unknown-sort-key");
    }

    #[tokio::test]
    async fn test_unknown_direction_is_bad_request() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/coins?orderBy=Value%20sideways").await;

        response.assert_status_bad_request();
    }
}

mod shaping {
    use super::*;

    #[tokio::test]
    async fn test_fields_keep_requested_order() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/users?fields=email,Id").await;

        response.assert_status_ok();
        let body: Value = response.json();
        for user in body.as_array().unwrap() {
            assert_eq!(keys(user), ["Email", "Id"]);
        }
    }

    #[tokio::test]
    async fn test_unknown_field_is_bad_request() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/users?fields=Id,Password").await;

        response.assert_status_bad_request();
        assert_problem(&response.json(), 400, "unknown-field");
    }

    #[tokio::test]
    async fn test_fields_are_echoed_in_page_links() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_plain("/api/countries?fields=Id,Name&pageSize=4")
            .await;

        assert_eq!(
            pagination(&response)["nextPageLink"],
            "http://localhost/api/countries?orderBy=Name&fields=Id%2CName&page=2&pageSize=4"
        );
    }
}

mod items {
    use super::*;

    #[tokio::test]
    async fn test_read_plain_item() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_plain(&format!("/api/coins/{}?fields=Type,FaceValue", seed::COIN_JAPANESE_YEN))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({"Type": "Yen", "FaceValue": 100}));
    }

    #[tokio::test]
    async fn test_read_hypermedia_item_has_links() {
        let harness = RestTestHarness::new();
        let path = format!("/api/users/{}", seed::USER_GEOFF);

        let response = harness.get_hateoas(&path).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["Name"], "Geoff Ramsey");
        assert_eq!(body["links"][0]["href"], format!("http://localhost{}", path));
        assert_eq!(body["links"][4]["rel"], "delete_user");
        assert_eq!(body["links"][4]["method"], "DELETE");
    }

    #[tokio::test]
    async fn test_blank_fields_keep_item_links() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_hateoas(&format!("/api/users/{}?fields=%2C", seed::USER_GEOFF))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["Email"], "geoff.ramsey@recollectable.example");
        assert_eq!(
            rels(&body["links"]),
            [
                "self",
                "create_user",
                "update_user",
                "partially_update_user",
                "delete_user",
            ]
        );
    }

    #[tokio::test]
    async fn test_read_missing_item_is_not_found() {
        let harness = RestTestHarness::new();

        let response = harness
            .get_plain(&format!("/api/coins/{}", uuid::Uuid::new_v4()))
            .await;

        response.assert_status_not_found();
        assert_problem(&response.json(), 404, "not-found");
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let harness = RestTestHarness::new();

        let response = harness.get("/api/coins/not-a-uuid").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let harness = RestTestHarness::new();
        let path = format!("/api/coins/{}", seed::COIN_US_DIME);

        let response = harness.server.delete(&path).await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(harness.backend.count::<Coin>(), 5);

        harness.get(&path).await.assert_status_not_found();
        harness.server.delete(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_post_to_existing_item_is_conflict() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post(&format!("/api/countries/{}", seed::COUNTRY_JAPAN))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_problem(&response.json(), 409, "conflict");
    }

    #[tokio::test]
    async fn test_post_to_missing_item_is_not_found() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post(&format!("/api/countries/{}", uuid::Uuid::new_v4()))
            .await;

        response.assert_status_not_found();
    }
}

mod writes {
    use super::*;

    fn user_body() -> Value {
        json!({
            "FirstName": "Geoff",
            "LastName": "Ramsey",
            "UserName": "geoff",
            "Email": "geoff@example.com",
        })
    }

    #[tokio::test]
    async fn test_every_item_link_is_routed() {
        let harness = RestTestHarness::new();

        let item: Value = harness
            .get_hateoas(&format!("/api/users/{}", seed::USER_GEOFF))
            .await
            .json();
        let links = item["links"].as_array().expect("item without links");
        assert_eq!(links.len(), 5);

        for link in links {
            let method = link["method"].as_str().unwrap();
            let href = link["href"].as_str().unwrap();
            let path = href.strip_prefix("http://localhost").unwrap();

            let request = harness
                .server
                .method(Method::from_bytes(method.as_bytes()).unwrap(), path);
            let request = match method {
                "POST" | "PUT" => request.json(&user_body()),
                "PATCH" => request.json(&json!([
                    { "op": "replace", "path": "/UserName", "value": "geoff.r" }
                ])),
                _ => request,
            };
            let response = request.await;

            assert_ne!(
                response.status_code(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {path} is not routed"
            );
            assert!(
                response.status_code().is_success(),
                "{method} {path} answered {}",
                response.status_code()
            );
        }
    }

    #[tokio::test]
    async fn test_create_returns_location_and_body() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post("/api/countries")
            .json(&json!({ "Name": "Brazil", "Description": "Reais" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["Name"], "Brazil");
        let location = response
            .headers()
            .get(LOCATION)
            .expect("Location header missing")
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(
            location,
            format!("http://localhost/api/countries/{}", body["Id"].as_str().unwrap())
        );
        assert_eq!(harness.backend.count::<Country>(), 7);

        let path = location.strip_prefix("http://localhost").unwrap();
        let stored: Value = harness.get_plain(path).await.json();
        assert_eq!(stored["Description"], "Reais");
    }

    #[tokio::test]
    async fn test_create_hypermedia_body_has_links() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post("/api/conditions")
            .add_header(ACCEPT, HeaderValue::from_static("application/json+hateoas"))
            .json(&json!({ "Grade": "PF70", "LanguageCode": "en-US" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["Grade"], "PF70");
        assert_eq!(rels(&body["links"])[0], "self");
    }

    #[tokio::test]
    async fn test_create_resolves_references() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post("/api/coins")
            .json(&json!({
                "Type": "Sen",
                "FaceValue": 50,
                "ReleaseDate": "1959",
                "CountryId": seed::COUNTRY_JAPAN,
                "CollectorValueId": "843a6427-48ab-421c-ba35-3159b1b024a5",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["Country"]["Name"], "Japan");
        assert_eq!(body["CollectorValue"]["XF40"], 25.0);
        assert_eq!(harness.backend.count::<Coin>(), 7);
    }

    #[tokio::test]
    async fn test_create_with_unknown_reference_is_bad_request() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post("/api/coins")
            .json(&json!({ "Type": "Sen", "CountryId": uuid::Uuid::new_v4() }))
            .await;

        response.assert_status_bad_request();
        assert_problem(&response.json(), 400, "invalid");
        assert_eq!(harness.backend.count::<Coin>(), 6);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_malformed_body() {
        let harness = RestTestHarness::new();

        harness
            .server
            .post("/api/users")
            .await
            .assert_status_bad_request();
        harness
            .server
            .post("/api/users")
            .text("{not json")
            .await
            .assert_status_bad_request();

        let response = harness
            .server
            .post("/api/users")
            .json(&json!({ "FirstName": "Gavin" }))
            .await;
        response.assert_status_bad_request();
        assert_problem(&response.json(), 400, "invalid");
    }

    #[tokio::test]
    async fn test_put_replaces_item() {
        let harness = RestTestHarness::new();
        let path = format!("/api/users/{}", seed::USER_RYAN);

        let response = harness.server.put(&path).json(&user_body()).await;
        response.assert_status(StatusCode::NO_CONTENT);

        let body: Value = harness.get_plain(&path).await.json();
        assert_eq!(body["Id"], seed::USER_RYAN.to_string());
        assert_eq!(body["Name"], "Geoff Ramsey");
        assert_eq!(body["Email"], "geoff@example.com");
    }

    #[tokio::test]
    async fn test_put_to_missing_item_is_not_found() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .put(&format!("/api/users/{}", uuid::Uuid::new_v4()))
            .json(&user_body())
            .await;

        response.assert_status_not_found();
        assert_problem(&response.json(), 404, "not-found");
    }

    #[tokio::test]
    async fn test_patch_changes_only_patched_fields() {
        let harness = RestTestHarness::new();
        let path = format!("/api/coins/{}", seed::COIN_JAPANESE_YEN);

        let response = harness
            .server
            .patch(&path)
            .json(&json!([
                { "op": "replace", "path": "/Type", "value": "Sen" },
                { "op": "replace", "path": "/CountryId", "value": seed::COUNTRY_KUWAIT },
            ]))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        let body: Value = harness.get_plain(&path).await.json();
        assert_eq!(body["Type"], "Sen");
        assert_eq!(body["FaceValue"], 100);
        assert_eq!(body["Metal"], "Cupronickel");
        assert_eq!(body["Country"]["Name"], "Kuwait");
    }

    #[tokio::test]
    async fn test_patch_errors() {
        let harness = RestTestHarness::new();
        let path = format!("/api/coins/{}", seed::COIN_JAPANESE_YEN);

        let missing_path = harness
            .server
            .patch(&path)
            .json(&json!([{ "op": "remove", "path": "/Colour" }]))
            .await;
        missing_path.assert_status_bad_request();

        let dangling = harness
            .server
            .patch(&path)
            .json(&json!([
                { "op": "replace", "path": "/CountryId", "value": uuid::Uuid::new_v4() }
            ]))
            .await;
        dangling.assert_status_bad_request();

        let body: Value = harness.get_plain(&path).await.json();
        assert_eq!(body["Country"]["Name"], "Japan");

        harness
            .server
            .patch(&format!("/api/coins/{}", uuid::Uuid::new_v4()))
            .json(&json!([]))
            .await
            .assert_status_not_found();
    }
}

mod collector_values {
    use super::*;

    #[tokio::test]
    async fn test_list_and_read() {
        let harness = RestTestHarness::new();

        let response = harness.get_plain("/api/collectorvalues?fields=Id,G4").await;

        response.assert_status_ok();
        assert_eq!(pagination(&response)["totalCount"], 6);
        let body: Value = response.json();
        assert_eq!(keys(&body[0]), ["Id", "G4"]);

        let id = body[0]["Id"].as_str().unwrap().to_string();
        let item: Value = harness
            .get_hateoas(&format!("/api/collectorvalues/{}", id))
            .await
            .json();
        assert_eq!(item["links"][4]["rel"], "delete_collectorvalue");
    }

    #[tokio::test]
    async fn test_only_id_is_sortable() {
        let harness = RestTestHarness::new();

        harness
            .get("/api/collectorvalues?orderBy=Id%20desc")
            .await
            .assert_status_ok();

        let response = harness.get("/api/collectorvalues?orderBy=G4").await;
        response.assert_status_bad_request();
        assert_problem(&response.json(), 400, "unknown-sort-key");
    }

    #[tokio::test]
    async fn test_create() {
        let harness = RestTestHarness::new();

        let response = harness
            .server
            .post("/api/collectorvalues")
            .json(&json!({ "G4": 18.64 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["G4"], 18.64);
        assert!(body["MS60"].is_null());
        assert_eq!(harness.backend.count::<CollectorValue>(), 7);
    }
}

mod system {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let harness = RestTestHarness::new();

        let response = harness.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "memory");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_full_stack_serves_requests() {
        let harness = RestTestHarness::full_stack(ServerConfig::for_testing());

        let response = harness.get_plain("/api/conditions?orderBy=Grade%20desc&fields=Grade").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0], json!({"Grade": "XF45"}));
    }

    #[tokio::test]
    async fn test_cors_exposes_pagination_header() {
        let config = ServerConfig {
            enable_cors: true,
            ..ServerConfig::for_testing()
        };
        let harness = RestTestHarness::full_stack(config);

        let response = harness
            .get_plain("/api/countries")
            .add_header(
                ORIGIN,
                HeaderValue::from_static("http://example.com"),
            )
            .await;

        response.assert_status_ok();
        let exposed = response
            .headers()
            .get(ACCESS_CONTROL_EXPOSE_HEADERS)
            .expect("expose headers missing");
        assert!(exposed.to_str().unwrap().contains("x-pagination"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let harness = RestTestHarness::new();

        harness.get("/api/stamps").await.assert_status_not_found();
    }
}
