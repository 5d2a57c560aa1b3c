//! Defines the route handler for the page that lists every transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    session::{SessionState, lock_session},
    transaction::view::transaction_list,
};

/// Render the page with all the transactions in the ledger, newest first.
pub async fn get_transactions_page(State(state): State<SessionState>) -> Response {
    let session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_response(),
    };

    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let transactions = transaction_list(session.ledger().iter(), "No transactions found.");

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class=(CARD_STYLE)
            {
                h1 class="mb-4 text-2xl font-bold" { "All Transactions" }

                (transactions)
            }
        }
    };

    base("Transactions", &[], &content).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        session::{Session, SessionState},
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
        transaction::{TransactionForm, TransactionKind},
    };

    use super::get_transactions_page;

    fn get_state(session: Session) -> SessionState {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    fn add_transaction(session: &mut Session, kind: TransactionKind, amount: &str, category: &str) {
        session.open_intake(date!(2025 - 10 - 05));
        session
            .submit_intake(TransactionForm {
                kind,
                amount: amount.to_owned(),
                category: category.to_owned(),
                description: String::new(),
                date: "2025-10-05".to_owned(),
            })
            .unwrap();
    }

    #[tokio::test]
    async fn empty_ledger_shows_empty_state() {
        let response = get_transactions_page(State(get_state(Session::new()))).await;

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text: String = html
            .select(&Selector::parse("[data-empty-state]").unwrap())
            .flat_map(|element| element.text())
            .collect();
        assert_eq!(text, "No transactions found.");
    }

    #[tokio::test]
    async fn lists_all_transactions_newest_first() {
        let mut session = Session::new();
        for index in 0..7 {
            add_transaction(
                &mut session,
                TransactionKind::Expense,
                &format!("{index}"),
                "Food",
            );
        }
        add_transaction(&mut session, TransactionKind::Income, "500", "Salary");

        let response = get_transactions_page(State(get_state(session))).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let amounts: Vec<String> = html
            .select(&Selector::parse("[data-amount]").unwrap())
            .map(|element| element.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(amounts.len(), 8);
        assert_eq!(amounts[0], "+$500.00");
        assert_eq!(amounts[1], "-$6.00");
        assert_eq!(amounts[7], "-$0.00");
    }
}
