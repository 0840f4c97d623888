#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use respect_application::{
    Args, AssertionError, ConfigurationError, ExpectError, FixedClock, Harness, HarnessConfig,
    Invocation, Subject,
};
use respect_domain::{DEFAULT_ERROR_BAG, RawResponse, Session, TestResponse};
use serde_json::{Value, json};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap()
}

fn harness() -> Harness {
    let config = HarnessConfig::new()
        .with_app_key("base64:test-key")
        .with_route("home", "/home")
        .with_route("users.show", "/users/{user}")
        .with_route("unsubscribe", "/unsubscribe/{user}");
    Harness::from_config(&config, Arc::new(FixedClock(now()))).unwrap()
}

fn assertion(error: &ExpectError) -> &AssertionError {
    error.as_assertion().expect("expected an assertion failure")
}

mod redirects {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_redirect_to_expected_uri_passes() {
        let harness = harness();
        let result = harness
            .expect(RawResponse::redirect("/home"))
            .to_be_redirect(Some("/home"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_redirect_without_uri_only_checks_status() {
        let harness = harness();
        assert!(harness.expect(RawResponse::redirect("/anywhere")).to_be_redirect(None).is_ok());

        let error = harness.expect(RawResponse::new(200)).to_be_redirect(None).unwrap_err();
        assert!(error.is_assertion_failure());
    }

    #[test]
    fn test_redirect_mismatch_names_both_uris() {
        let harness = harness();
        let error = harness
            .expect(RawResponse::redirect("/home"))
            .to_be_redirect(Some("/other"))
            .unwrap_err();

        let failure = assertion(&error);
        assert!(matches!(failure, AssertionError::ExpectationFailed { .. }));
        assert_eq!(
            failure.message(),
            "Failed asserting that the redirect uri [/home] matches [/other]"
        );
        assert!(failure.message().contains("/home"));
        assert!(failure.message().contains("/other"));
    }

    #[test]
    fn test_location_resolves_against_app_url() {
        let harness = harness();
        let response = RawResponse::redirect("/home");
        assert!(harness.expect(response.clone()).to_have_location("http://localhost/home").is_ok());
        assert!(harness.expect(response).to_have_location("/elsewhere").is_err());
    }

    #[test]
    fn test_signed_route_redirect() {
        let harness = harness();
        let url = harness.context().url();
        let signed = url
            .signed_route("unsubscribe", &json!({"user": 7}), Some(now() + Duration::hours(1)))
            .unwrap();
        let response = RawResponse::redirect(signed);

        assert!(
            harness
                .expect(response.clone())
                .to_be_redirect_to_signed_route(None, Value::Null)
                .is_ok()
        );
        assert!(
            harness
                .expect(response.clone())
                .to_be_redirect_to_signed_route(Some("unsubscribe"), json!({"user": 7}))
                .is_ok()
        );
        assert!(
            harness
                .expect(response)
                .to_be_redirect_to_signed_route(Some("unsubscribe"), json!({"user": 8}))
                .is_err()
        );
    }

    #[test]
    fn test_expired_or_unsigned_redirect_fails() {
        let harness = harness();
        let url = harness.context().url();
        let expired = url
            .signed_route("home", &Value::Null, Some(now() - Duration::minutes(1)))
            .unwrap();

        let error = harness
            .expect(RawResponse::redirect(expired))
            .to_be_redirect_to_signed_route(None, Value::Null)
            .unwrap_err();
        assert_eq!(
            assertion(&error).message(),
            "The response is not a redirect to a signed route."
        );

        assert!(
            harness
                .expect(RawResponse::redirect("/home"))
                .to_be_redirect_to_signed_route(None, Value::Null)
                .is_err()
        );
    }

    #[test]
    fn test_signed_route_with_unknown_name_is_a_configuration_error() {
        let harness = harness();
        let error = harness
            .expect(RawResponse::redirect("/home"))
            .to_be_redirect_to_signed_route(Some("missing"), Value::Null)
            .unwrap_err();
        assert_eq!(
            error,
            ExpectError::Configuration(ConfigurationError::UnknownRoute("missing".into()))
        );
    }
}

mod statuses {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ok_and_not_found() {
        let harness = harness();
        assert!(harness.expect(RawResponse::new(200)).to_be_ok().is_ok());

        let error = harness.expect(RawResponse::new(200)).to_be_not_found().unwrap_err();
        assert!(error.is_assertion_failure());
        assert_eq!(
            assertion(&error).message(),
            "Expected response status code [404] but received 200."
        );
    }

    #[test]
    fn test_each_status_expectation() {
        let harness = harness();
        assert!(harness.expect(RawResponse::new(204)).to_be_successful().is_ok());
        assert!(harness.expect(RawResponse::new(201)).to_confirm_creation().is_ok());
        assert!(harness.expect(RawResponse::new(401)).to_be_unauthorized().is_ok());
        assert!(harness.expect(RawResponse::new(403)).to_be_forbidden().is_ok());
        assert!(harness.expect(RawResponse::new(404)).to_be_not_found().is_ok());
        assert!(harness.expect(RawResponse::new(418)).to_have_status(418).is_ok());
        assert!(harness.expect(RawResponse::new(500)).to_be_successful().is_err());
        assert!(harness.expect(RawResponse::new(200)).to_confirm_creation().is_err());
    }

    #[test]
    fn test_no_content() {
        let harness = harness();
        assert!(harness.expect(RawResponse::new(204)).to_have_no_content(None).is_ok());
        assert!(harness.expect(RawResponse::new(202)).to_have_no_content(Some(202)).is_ok());

        let error = harness
            .expect(RawResponse::new(204).with_body("oops"))
            .to_have_no_content(None)
            .unwrap_err();
        assert_eq!(assertion(&error).message(), "Response content is not empty.");
    }
}

mod content {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> RawResponse {
        RawResponse::html(200, "<h1>Welcome</h1><p>Hello <b>world</b> &amp; friends</p>")
    }

    #[test]
    fn test_render_and_render_text() {
        let harness = harness();
        assert!(harness.expect(page()).to_render("<h1>Welcome</h1>", false).is_ok());
        assert!(harness.expect(page()).to_render(vec!["Welcome", "friends"], false).is_ok());
        assert!(harness.expect(page()).to_render("& friends", true).is_ok());
        assert!(harness.expect(page()).to_render_text("Hello world", false).is_ok());
        assert!(harness.expect(page()).to_render("Hello world", false).is_err());
    }

    #[test]
    fn test_in_order() {
        let harness = harness();
        assert!(harness.expect(page()).to_render_in_order(vec!["Welcome", "Hello"], false).is_ok());
        assert!(harness.expect(page()).to_render_in_order(vec!["Hello", "Welcome"], false).is_err());
        assert!(
            harness
                .expect(page())
                .to_render_text_in_order(vec!["Welcome", "Hello world"], false)
                .is_ok()
        );
    }

    #[test]
    fn test_contain_text_matches_render_text() {
        let harness = harness();
        let cases: [(&str, bool); 3] = [("Hello world", false), ("<b>world</b>", false), ("& friends", true)];

        for (needle, escape) in cases {
            let render = harness.expect(page()).to_render_text(needle, escape).map(|_| ());
            let contain = harness.expect(page()).to_contain_text(needle, escape).map(|_| ());
            assert_eq!(render, contain, "{needle}");
        }

        for needles in [vec!["Welcome", "friends"], vec!["friends", "Welcome"]] {
            let render = harness
                .expect(page())
                .to_render_text_in_order(needles.clone(), false)
                .map(|_| ());
            let contain = harness
                .expect(page())
                .to_contain_text_in_order(needles, false)
                .map(|_| ());
            assert_eq!(render, contain);
        }
    }

    #[test]
    fn test_download_failures_are_promoted() {
        let harness = harness();
        let download = RawResponse::new(200)
            .with_header("Content-Disposition", "attachment; filename=report.pdf");
        assert!(harness.expect(download.clone()).to_be_download(None).is_ok());
        assert!(harness.expect(download.clone()).to_be_download(Some("report.pdf")).is_ok());

        let error = harness.expect(download).to_be_download(Some("other.pdf")).unwrap_err();
        assert_eq!(
            assertion(&error),
            &AssertionError::expectation(
                "Expected file [other.pdf] is not present in Content-Disposition header."
            )
        );

        let error = harness.expect(RawResponse::new(200)).to_be_download(None).unwrap_err();
        assert!(matches!(assertion(&error), AssertionError::ExpectationFailed { .. }));
        assert!(assertion(&error).message().starts_with("Response does not offer a file download."));
    }
}

mod json_bodies {
    use super::*;

    fn body() -> RawResponse {
        RawResponse::json(200, &json!({"a": 1, "b": 2}))
    }

    #[test]
    fn test_superset_versus_exact() {
        let harness = harness();
        assert!(harness.expect(body()).to_have_json(json!({"a": 1}), false).is_ok());

        let error = harness.expect(body()).to_have_exact_json(json!({"a": 1})).unwrap_err();
        assert!(error.is_assertion_failure());
        assert!(harness.expect(body()).to_have_exact_json(json!({"b": 2, "a": 1})).is_ok());
    }

    #[test]
    fn test_strict_json() {
        let harness = harness();
        let response = RawResponse::json(200, &json!({"id": "1"}));
        assert!(harness.expect(response.clone()).to_have_json(json!({"id": 1}), false).is_ok());
        assert!(harness.expect(response).to_have_json(json!({"id": 1}), true).is_err());
    }

    #[test]
    fn test_fragment_structure_and_path() {
        let harness = harness();
        let response = RawResponse::json(
            200,
            &json!({"data": [{"id": 1, "name": "Ada"}, {"id": 2, "name": "Grace"}], "meta": {"total": 2}}),
        );

        harness
            .expect(response)
            .to_have_json_fragment(json!({"name": "Grace"}))
            .and_then(|e| e.to_have_json_structure(Some(json!(["meta", {"data": {"*": ["id", "name"]}}])), None))
            .and_then(|e| e.to_have_json_path("data.1.id", 2))
            .and_then(|e| e.to_have_json_path("meta.total", json!(2)))
            .unwrap();
    }

    #[test]
    fn test_missing_json_path_compares_as_null() {
        let harness = harness();
        assert!(harness.expect(body()).to_have_json_path("c", Value::Null).is_ok());
        assert!(harness.expect(body()).to_have_json_path("a", "1").is_err());
    }
}

mod validation {
    use super::*;

    fn json_errors() -> RawResponse {
        RawResponse::json(422, &json!({"errors": {"email": ["The email field is required."]}}))
    }

    fn session_errors() -> TestResponse {
        let mut session = Session::new();
        session.flash_error(DEFAULT_ERROR_BAG, "email", "The email must be valid.");
        TestResponse::from_base_response(RawResponse::redirect("/register")).with_session(session)
    }

    #[test]
    fn test_json_validation_errors() {
        let harness = harness();
        assert!(harness.expect(json_errors()).to_have_json_validation_errors("email", None).is_ok());
        assert!(
            harness
                .expect(json_errors())
                .to_have_json_validation_errors(json!({"email": "The * field is required."}), Some("errors"))
                .is_ok()
        );
        assert!(harness.expect(json_errors()).to_have_json_validation_errors("name", None).is_err());
    }

    #[test]
    fn test_valid_and_invalid() {
        let harness = harness();
        assert!(harness.expect(json_errors()).to_have_invalid("email", None, None).is_ok());
        assert!(harness.expect(json_errors()).to_have_valid("name", None, None).is_ok());
        assert!(harness.expect(json_errors()).to_have_valid(Value::Null, None, None).is_err());

        assert!(harness.expect(session_errors()).to_have_invalid("email", None, None).is_ok());
        assert!(harness.expect(session_errors()).to_have_valid("email", None, None).is_err());
        assert!(harness.expect(session_errors()).to_have_valid("email", Some("login"), None).is_ok());
    }
}

mod headers {
    use super::*;

    #[test]
    fn test_missing_header() {
        let harness = harness();
        let response = RawResponse::new(200);
        assert!(harness.expect(response.clone()).to_have_missing_header("X-Foo").is_ok());

        let error = harness.expect(response).to_have_header("X-Foo", None).unwrap_err();
        assert!(error.is_assertion_failure());
    }

    #[test]
    fn test_header_value() {
        let harness = harness();
        let response = RawResponse::new(200).with_header("Content-Length", "12");
        assert!(harness.expect(response.clone()).to_have_header("content-length", Some("12")).is_ok());
        assert!(harness.expect(response.clone()).to_have_header("Content-Length", Some("13")).is_err());
        assert!(
            harness
                .expect(response)
                .invoke("to_have_header", Args::new().with("Content-Length").with(12))
                .is_ok()
        );
    }
}

mod session {
    use super::*;

    fn response() -> TestResponse {
        TestResponse::from_base_response(RawResponse::redirect("/"))
            .with_session(Session::new().with("status", "saved").with("count", 2))
    }

    #[test]
    fn test_session_values() {
        let harness = harness();
        assert!(harness.expect(response()).to_have_session("status", None).is_ok());
        assert!(harness.expect(response()).to_have_session("status", Some(json!("saved"))).is_ok());
        assert!(harness.expect(response()).to_have_session(json!(["status", "count"]), None).is_ok());
        assert!(harness.expect(response()).to_have_session("missing", None).is_err());
        assert!(harness.expect(response()).to_have_all_session(json!({"count": 2})).is_ok());
        assert!(harness.expect(response()).to_have_all_session(json!({"count": 3})).is_err());
    }

    #[test]
    fn test_raw_responses_have_an_empty_session() {
        let harness = harness();
        assert!(harness.expect(RawResponse::new(200)).to_have_session("status", None).is_err());
    }
}

mod registry {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_name_is_a_configuration_error() {
        let harness = harness();
        let error = harness
            .expect(RawResponse::new(200))
            .invoke("to_be_teapot", Args::new())
            .unwrap_err();
        assert!(error.is_configuration_error());
        assert!(!error.is_assertion_failure());
    }

    #[test]
    fn test_non_response_subject_is_a_configuration_error() {
        let harness = harness();
        let error = harness.expect(json!({"status": 200})).to_be_ok().unwrap_err();
        assert_eq!(
            error,
            ExpectError::Configuration(ConfigurationError::UnsupportedSubject("object".into()))
        );
    }

    #[test]
    fn test_raw_and_wrapped_subjects_agree() {
        let harness = harness();
        let raw = RawResponse::redirect("/home");
        let wrapped = TestResponse::from_base_response(raw.clone());

        for name in ["to_be_ok", "to_be_redirect", "to_be_successful"] {
            let left = harness.invoke(&Subject::from(raw.clone()), name, Args::new());
            let right = harness.invoke(&Subject::from(wrapped.clone()), name, Args::new());
            assert_eq!(left, right, "{name}");
        }
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut harness = harness();
        harness
            .registry_mut()
            .register("to_be_ok", |_: &Invocation<'_>, _: &Args| {
                Err(AssertionError::expectation("always fails").into())
            });

        let error = harness.expect(RawResponse::new(200)).to_be_ok().unwrap_err();
        assert_eq!(assertion(&error).message(), "always fails");
    }

    #[test]
    fn test_chain_returns_the_same_subject() {
        let harness = harness();
        let subject = harness
            .expect(RawResponse::redirect("/home").with_header("X-Trace", "1"))
            .to_be_redirect(Some("/home"))
            .and_then(|e| e.to_have_header("X-Trace", Some("1")))
            .and_then(|e| e.to_have_location("/home"))
            .unwrap()
            .into_subject();
        assert_eq!(subject, Subject::from(RawResponse::redirect("/home").with_header("X-Trace", "1")));
    }
}
