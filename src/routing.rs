//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    api::{get_summary_json, get_transactions_json},
    dashboard::{get_dashboard_overview, get_dashboard_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        cancel_transaction_endpoint, create_transaction_endpoint, get_new_transaction_page,
        get_transactions_page, update_draft_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_OVERVIEW, get(get_dashboard_overview))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_json).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION_DRAFT, put(update_draft_endpoint))
        .route(
            endpoints::CANCEL_TRANSACTION,
            post(cancel_transaction_endpoint),
        )
        .route(endpoints::SUMMARY_API, get(get_summary_json));

    view_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use serde_json::Value;

    use crate::{
        AppState, endpoints,
        routing::build_router,
        transaction::{LEDGER_CHANGED_EVENT, TransactionForm, TransactionKind},
    };

    fn get_test_server() -> TestServer {
        let state = AppState::new("Etc/UTC").expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn form(kind: TransactionKind, amount: &str, category: &str) -> TransactionForm {
        TransactionForm {
            kind,
            amount: amount.to_owned(),
            category: category.to_owned(),
            description: String::new(),
            date: "2025-10-05".to_owned(),
        }
    }

    async fn transaction_count(server: &TestServer) -> usize {
        server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Value>>()
            .len()
    }

    #[tokio::test]
    async fn successful_submit_shows_alert_and_triggers_refresh() {
        let server = get_test_server();
        server
            .get(endpoints::NEW_TRANSACTION_VIEW)
            .await
            .assert_status_ok();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Expense, "12.50", "Food"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("hx-trigger"), LEDGER_CHANGED_EVENT);
        let text = response.text();
        assert!(text.contains("Transaction Added"));
        assert!(text.contains("Expense of $12.50 added successfully."));

        let summary = server.get(endpoints::SUMMARY_API).await.json::<Value>();
        assert_eq!(summary["balance"], -12.5);
        assert_eq!(summary["total_income"], 0.0);
        assert_eq!(summary["total_expenses"], 12.5);
        assert_eq!(transaction_count(&server).await, 1);
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_changing_ledger() {
        let server = get_test_server();
        server.get(endpoints::NEW_TRANSACTION_VIEW).await;

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Expense, "", "Food"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Missing Information"));
        assert_eq!(transaction_count(&server).await, 0);
    }

    #[tokio::test]
    async fn income_then_expense_is_newest_first() {
        let server = get_test_server();

        for (kind, amount, category) in [
            (TransactionKind::Income, "1000", "Salary"),
            (TransactionKind::Expense, "200", "Food"),
        ] {
            server.get(endpoints::NEW_TRANSACTION_VIEW).await;
            server
                .post(endpoints::TRANSACTIONS_API)
                .form(&form(kind, amount, category))
                .await
                .assert_status_ok();
        }

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Value>>();
        let kinds: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction["kind"].as_str().unwrap_or_default().to_owned())
            .collect();
        assert_eq!(kinds, vec!["expense", "income"]);

        let summary = server.get(endpoints::SUMMARY_API).await.json::<Value>();
        assert_eq!(summary["balance"], 800.0);
    }

    #[tokio::test]
    async fn income_submitted_without_editing_draft() {
        let server = get_test_server();
        server
            .get(endpoints::NEW_TRANSACTION_VIEW)
            .await
            .assert_status_ok();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Income, "1000", "Salary"))
            .await;

        response.assert_status_ok();
        assert!(
            response
                .text()
                .contains("Income of $1000 added successfully.")
        );
        let summary = server.get(endpoints::SUMMARY_API).await.json::<Value>();
        assert_eq!(summary["balance"], 1000.0);
        assert_eq!(summary["total_income"], 1000.0);
    }

    #[tokio::test]
    async fn income_after_switching_kind_in_browser() {
        let server = get_test_server();
        server
            .get(endpoints::NEW_TRANSACTION_VIEW)
            .await
            .assert_status_ok();

        // Clicking the income radio sends the form with no category selected.
        let response = server
            .put(endpoints::TRANSACTION_DRAFT)
            .form(&form(TransactionKind::Income, "", ""))
            .await;
        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        let options: Vec<String> = html
            .select(&Selector::parse("select[name=category] option").unwrap())
            .map(|option| option.text().collect())
            .collect();
        assert!(options.contains(&"Salary".to_owned()));
        assert!(!options.contains(&"Food".to_owned()));

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Income, "1000", "Salary"))
            .await
            .assert_status_ok();

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Value>>();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0]["kind"], "income");
        assert_eq!(transactions[0]["category"], "Salary");
    }

    #[tokio::test]
    async fn switching_kind_clears_category() {
        let server = get_test_server();
        server.get(endpoints::NEW_TRANSACTION_VIEW).await;
        server
            .put(endpoints::TRANSACTION_DRAFT)
            .form(&form(TransactionKind::Expense, "5", "Food"))
            .await
            .assert_status_ok();

        let response = server
            .put(endpoints::TRANSACTION_DRAFT)
            .form(&form(TransactionKind::Income, "5", "Food"))
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        let selected: Vec<String> = html
            .select(&Selector::parse("select[name=category] option[selected]").unwrap())
            .map(|option| option.text().collect())
            .collect();
        assert_eq!(selected, vec!["Select category"]);

        // Submitting now fails since the category was cleared.
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Income, "5", ""))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cancel_discards_form() {
        let server = get_test_server();
        server.get(endpoints::NEW_TRANSACTION_VIEW).await;

        server
            .post(endpoints::CANCEL_TRANSACTION)
            .await
            .assert_status_ok();
        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Expense, "12.50", "Food"))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(transaction_count(&server).await, 0);
    }

    #[tokio::test]
    async fn dashboard_renders_after_submit() {
        let server = get_test_server();
        server.get(endpoints::NEW_TRANSACTION_VIEW).await;
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form(TransactionKind::Income, "250", "Gift"))
            .await;

        let response = server.get(endpoints::DASHBOARD_OVERVIEW).await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        let balance: String = html
            .select(&Selector::parse("#balance").unwrap())
            .next()
            .expect("No balance card found")
            .text()
            .collect();
        assert_eq!(balance, "$250.00");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
